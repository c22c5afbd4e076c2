use common::{Money, UserId};
use criterion::{Criterion, criterion_group, criterion_main};
use domain::{
    Address, CartStore, NotificationCenter, OrderFactory, OrderLedger, PaymentMethod,
    PricingEngine, Product, build_timeline,
};
use kv_store::InMemoryKvStore;

fn bench_cart() -> CartStore {
    let mut cart = CartStore::new();
    cart.add_item(
        Product::new("SKU-001", "Widget", Money::from_cents(2000), "gadgets", 25),
        2,
    );
    cart.add_item(
        Product::new("SKU-002", "Gadget", Money::from_cents(1500), "gadgets", 8),
        1,
    );
    cart.add_item(
        Product::new("SKU-003", "Doodad", Money::from_cents(550), "gadgets", 40),
        3,
    );
    cart
}

fn bench_address() -> Address {
    Address {
        name: "Jane Doe".to_string(),
        street: "123 Market St".to_string(),
        city: "San Francisco".to_string(),
        state: "CA".to_string(),
        zip_code: "94103".to_string(),
        country: "United States".to_string(),
        phone: "555-0100".to_string(),
    }
}

fn bench_quote(c: &mut Criterion) {
    let engine = PricingEngine::default();
    let cart = bench_cart();

    c.bench_function("pricing/quote_with_promo", |b| {
        b.iter(|| cart.totals(&engine, Some("SAVE10")));
    });
}

fn bench_create_order(c: &mut Criterion) {
    let factory = OrderFactory::default();
    let cart = bench_cart();
    let user_id = UserId::new();

    c.bench_function("order/create_order", |b| {
        b.iter(|| {
            factory
                .create_order(&cart, bench_address(), PaymentMethod::Card, user_id, None)
                .unwrap()
        });
    });
}

fn bench_build_timeline(c: &mut Criterion) {
    let factory = OrderFactory::default();
    let order = factory
        .create_order(
            &bench_cart(),
            bench_address(),
            PaymentMethod::Card,
            UserId::new(),
            None,
        )
        .unwrap();

    c.bench_function("tracking/build_timeline", |b| {
        b.iter(|| build_timeline(&order));
    });
}

fn bench_checkout_cycle(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let factory = OrderFactory::default();
    let cart = bench_cart();

    c.bench_function("order/checkout_and_save", |b| {
        b.iter(|| {
            rt.block_on(async {
                let store = InMemoryKvStore::new();
                let ledger = OrderLedger::new(store.clone(), NotificationCenter::new(store));
                let order = factory
                    .create_order(
                        &cart,
                        bench_address(),
                        PaymentMethod::Card,
                        UserId::new(),
                        None,
                    )
                    .unwrap();
                ledger.save(&order).await.unwrap();
            });
        });
    });
}

criterion_group!(
    benches,
    bench_quote,
    bench_create_order,
    bench_build_timeline,
    bench_checkout_cycle
);
criterion_main!(benches);
