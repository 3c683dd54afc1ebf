use cart_core::{
    fixed_clock, Cart, CartError, Catalog, Checkout, Customer, Money, Product, RecordingSink,
    SharedClock, Weight,
};
use chrono::{Days, NaiveDate};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
}

fn clock() -> SharedClock {
    fixed_clock(today())
}

fn store() -> Catalog {
    let t = today();
    Catalog::from_products([
        Product::new("Cheese", Money::from_major(100), 10)
            .with_expiry(t + Days::new(2))
            .with_weight(Weight::from_grams(400)),
        Product::new("Biscuits", Money::from_major(150), 5)
            .with_expiry(t + Days::new(1))
            .with_weight(Weight::from_grams(700)),
        Product::new("Lotus Biscuits", Money::from_major(150), 5)
            .with_expiry(t - Days::new(1))
            .with_weight(Weight::from_grams(700)),
        Product::new("TV", Money::from_major(200), 3).with_weight(Weight::from_grams(5000)),
        Product::new("Scratch Card", Money::from_major(50), 3),
    ])
    .unwrap()
}

fn fill(cart: &mut Cart, catalog: &Catalog, items: &[(&str, u32)]) -> Result<(), CartError> {
    for (name, qty) in items {
        cart.add_product(catalog.require(name)?, *qty)?;
    }
    Ok(())
}

#[test]
fn mixed_cart_prints_notice_and_receipt() {
    let mut catalog = store();
    let mut cart = Cart::with_clock(clock());
    fill(&mut cart, &catalog, &[("Cheese", 2), ("Biscuits", 1), ("Scratch Card", 1)]).unwrap();

    let mut customer = Customer::new("Shaza", Money::from_major(500));
    let mut sink = RecordingSink::default();
    let receipt = Checkout::new(clock())
        .run(&mut customer, &cart, &mut catalog, &mut sink)
        .unwrap();

    assert_eq!(
        sink.notices[0].to_string(),
        "** Shipment notice **\n\
         2x Cheese    400g\n\
         1x Biscuits    700g\n\
         Total package weight 1.5kg"
    );
    assert_eq!(
        receipt.to_string(),
        "** Checkout receipt **\n\
         2x Cheese     200\n\
         1x Biscuits     150\n\
         1x Scratch Card     50\n\
         ----------------------\n\
         Subtotal     400\n\
         Shipping     30\n\
         Amount       430"
    );
    assert_eq!(sink.receipts, vec![receipt]);
    assert_eq!(customer.balance(), Money::from_major(70));
    assert_eq!(catalog.get("Scratch Card").unwrap().quantity(), 2);
}

#[test]
fn expired_product_stops_filling_but_checkout_proceeds() {
    let mut catalog = store();
    let mut cart = Cart::with_clock(clock());
    let err = fill(
        &mut cart,
        &catalog,
        &[("Cheese", 2), ("Lotus Biscuits", 1), ("Scratch Card", 2)],
    )
    .unwrap_err();

    assert_eq!(err.to_string(), "Lotus Biscuits is expired.");
    assert_eq!(cart.len(), 1);

    let mut customer = Customer::new("Shaza", Money::from_major(500));
    let receipt = Checkout::new(clock())
        .run(&mut customer, &cart, &mut catalog, &mut RecordingSink::default())
        .unwrap();
    assert_eq!(receipt.amount, Money::from_major(230));
}

#[test]
fn over_budget_cart_is_refused() {
    let mut catalog = store();
    let mut cart = Cart::with_clock(clock());
    fill(&mut cart, &catalog, &[("Cheese", 4), ("Biscuits", 2)]).unwrap();

    let mut customer = Customer::new("Shaza", Money::from_major(500));
    let mut sink = RecordingSink::default();
    let err = Checkout::new(clock())
        .run(&mut customer, &cart, &mut catalog, &mut sink)
        .unwrap_err();

    assert!(matches!(err, CartError::InsufficientBalance { .. }));
    assert_eq!(customer.balance(), Money::from_major(500));
    assert_eq!(sink.notices[0].total_weight, Weight::from_grams(3000));
    assert!(sink.receipts.is_empty());
}

#[test]
fn over_stock_request_is_refused_at_add_time() {
    let mut catalog = store();
    let mut cart = Cart::with_clock(clock());
    let err = fill(&mut cart, &catalog, &[("Cheese", 1), ("Scratch Card", 4)]).unwrap_err();
    assert!(matches!(err, CartError::InsufficientStock { .. }));

    let mut customer = Customer::new("Shaza", Money::from_major(500));
    let receipt = Checkout::new(clock())
        .run(&mut customer, &cart, &mut catalog, &mut RecordingSink::default())
        .unwrap();
    assert_eq!(receipt.lines.len(), 1);
    assert_eq!(receipt.amount, Money::from_major(130));
}

#[test]
fn non_shippable_items_are_left_off_the_notice() {
    let mut catalog = store();
    let mut cart = Cart::with_clock(clock());
    fill(&mut cart, &catalog, &[("Scratch Card", 1), ("TV", 1)]).unwrap();

    let mut customer = Customer::new("Shaza", Money::from_major(1000));
    let mut sink = RecordingSink::default();
    Checkout::new(clock())
        .run(&mut customer, &cart, &mut catalog, &mut sink)
        .unwrap();

    let notice = &sink.notices[0];
    assert_eq!(notice.lines.len(), 1);
    assert_eq!(notice.lines[0].name, "TV");
    assert_eq!(notice.total_weight, Weight::from_grams(5000));
}

#[test]
fn repeated_checkout_of_same_cart_runs_out_of_stock() {
    let mut catalog = store();
    let mut cart = Cart::with_clock(clock());
    fill(&mut cart, &catalog, &[("TV", 2)]).unwrap();

    let mut customer = Customer::new("Shaza", Money::from_major(2000));
    let checkout = Checkout::new(clock());
    checkout
        .run(&mut customer, &cart, &mut catalog, &mut RecordingSink::default())
        .unwrap();

    let err = checkout
        .run(&mut customer, &cart, &mut catalog, &mut RecordingSink::default())
        .unwrap_err();
    assert!(matches!(
        err,
        CartError::InsufficientStock {
            requested: 2,
            available: 1,
            ..
        }
    ));
}

#[test]
fn shipment_notice_survives_a_refused_charge_in_json() {
    let mut catalog = store();
    let mut cart = Cart::with_clock(clock());
    fill(&mut cart, &catalog, &[("TV", 3)]).unwrap();

    let mut customer = Customer::new("Shaza", Money::from_major(100));
    let mut sink = RecordingSink::default();
    let err = Checkout::new(clock())
        .run(&mut customer, &cart, &mut catalog, &mut sink)
        .unwrap_err();

    assert!(matches!(err, CartError::InsufficientBalance { .. }));
    let json = sink.notices[0].to_json().unwrap();
    assert!(json.contains("\"total_weight\": 15000000"));
}
