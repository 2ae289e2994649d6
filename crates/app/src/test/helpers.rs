//! Test Helpers

use crate::domain::products::{data::NewProduct, records::ProductUuid};

pub(crate) fn new_product(uuid: ProductUuid, unit_price: u64) -> NewProduct {
    NewProduct {
        uuid,
        name: format!("Product {uuid}"),
        description: None,
        unit_price,
    }
}
