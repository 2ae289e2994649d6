//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{affix_state::inject, prelude::*};
use uuid::Uuid;

use stockroom_app::{
    auth::MockAuthService,
    context::AppContext,
    domain::{
        inventory::{
            MockInventoryService,
            records::{TransactionRecord, TransactionType, TransactionUuid},
        },
        products::{
            MockProductsService,
            records::{ProductRecord, ProductUuid},
        },
        reports::MockReportsService,
        users::records::UserUuid,
    },
};

use crate::{extensions::*, state::State};

pub(crate) const TEST_USER_UUID: UserUuid = UserUuid::from_uuid(Uuid::nil());

#[salvo::handler]
pub(crate) async fn inject_user(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    depot.insert_user_uuid(TEST_USER_UUID);
    ctrl.call_next(req, depot, res).await;
}

pub(crate) fn make_product(uuid: ProductUuid) -> ProductRecord {
    ProductRecord {
        uuid,
        name: "Hex bolt".to_string(),
        description: None,
        quantity: 0,
        unit_price: 100,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_transaction(
    product: ProductUuid,
    transaction_type: TransactionType,
    quantity: u64,
) -> TransactionRecord {
    TransactionRecord {
        uuid: TransactionUuid::new(),
        product_uuid: product,
        transaction_type,
        quantity,
        transaction_date: Timestamp::UNIX_EPOCH,
        created_by: TEST_USER_UUID,
        notes: String::new(),
    }
}

fn strict_auth_mock() -> MockAuthService {
    let mut auth = MockAuthService::new();

    auth.expect_authenticate_bearer().never();

    auth
}

fn strict_products_mock() -> MockProductsService {
    let mut products = MockProductsService::new();

    products.expect_list_products().never();
    products.expect_get_product().never();
    products.expect_create_product().never();
    products.expect_update_product().never();
    products.expect_delete_product().never();

    products
}

fn strict_inventory_mock() -> MockInventoryService {
    let mut inventory = MockInventoryService::new();

    inventory.expect_stock_in().never();
    inventory.expect_stock_out().never();
    inventory.expect_list_transactions().never();

    inventory
}

fn strict_reports_mock() -> MockReportsService {
    let mut reports = MockReportsService::new();

    reports.expect_dashboard().never();
    reports.expect_daily_report().never();
    reports.expect_monthly_report().never();

    reports
}

fn state(
    products: MockProductsService,
    inventory: MockInventoryService,
    reports: MockReportsService,
    auth: MockAuthService,
) -> Arc<State> {
    State::from_app_context(AppContext {
        products: Arc::new(products),
        inventory: Arc::new(inventory),
        reports: Arc::new(reports),
        auth: Arc::new(auth),
    })
}

pub(crate) fn state_with_auth(auth: MockAuthService) -> Arc<State> {
    state(
        strict_products_mock(),
        strict_inventory_mock(),
        strict_reports_mock(),
        auth,
    )
}

fn authenticated_service(state: Arc<State>, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state))
            .hoop(inject_user)
            .push(route),
    )
}

pub(crate) fn products_service(products: MockProductsService, route: Router) -> Service {
    authenticated_service(
        state(
            products,
            strict_inventory_mock(),
            strict_reports_mock(),
            strict_auth_mock(),
        ),
        route,
    )
}

pub(crate) fn inventory_service(inventory: MockInventoryService, route: Router) -> Service {
    authenticated_service(
        state(
            strict_products_mock(),
            inventory,
            strict_reports_mock(),
            strict_auth_mock(),
        ),
        route,
    )
}

pub(crate) fn reports_service(reports: MockReportsService, route: Router) -> Service {
    authenticated_service(
        state(
            strict_products_mock(),
            strict_inventory_mock(),
            reports,
            strict_auth_mock(),
        ),
        route,
    )
}
