//! Staged dataset generation.

use std::collections::HashMap;

use chrono::{Duration, NaiveDate, Utc};
use entities::{
    round2, Dataset, Order, OrderItem, OrderStatus, Payment, PaymentMethod, PaymentStatus,
    Product, ProductCategory, User,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use crate::{date_between, names, Categorical, GenerateError, GenerateResult, UniquePool};

/// Default approximate order count.
pub const DEFAULT_ORDER_COUNT: u32 = 300;

/// Users sign up within the two years preceding generation.
const SIGNUP_WINDOW_DAYS: i64 = 730;

const MIN_PRICE: f64 = 5.0;
const MAX_PRICE: f64 = 500.0;
const MAX_STOCK: u32 = 500;
const MAX_ITEMS_PER_ORDER: u32 = 5;
const MAX_QUANTITY: u32 = 5;

const ORDER_STATUS_WEIGHTS: [(OrderStatus, f64); 3] = [
    (OrderStatus::Pending, 0.2),
    (OrderStatus::Completed, 0.7),
    (OrderStatus::Cancelled, 0.1),
];

const PAYMENT_STATUS_WEIGHTS: [(PaymentStatus, f64); 3] = [
    (PaymentStatus::Successful, 0.75),
    (PaymentStatus::Failed, 0.15),
    (PaymentStatus::Pending, 0.1),
];

/// Validated generation parameters.
#[derive(Debug, Clone, Copy)]
pub struct GeneratorConfig {
    orders: u32,
    seed: u64,
}

impl GeneratorConfig {
    /// Creates a config for roughly `orders` orders. Zero is rejected
    /// before any generation work begins.
    pub fn new(orders: u32, seed: u64) -> GenerateResult<Self> {
        if orders == 0 {
            return Err(GenerateError::InvalidRowCount(orders));
        }
        Ok(Self { orders, seed })
    }

    pub fn order_count(&self) -> u32 {
        self.orders
    }

    /// 60% of the order count, floored at 50.
    pub fn user_count(&self) -> u32 {
        ((self.orders as f64 * 0.6) as u32).max(50)
    }

    /// 50% of the order count, floored at 40.
    pub fn product_count(&self) -> u32 {
        ((self.orders as f64 * 0.5) as u32).max(40)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

/// Draws a fresh seed from the thread RNG, for runs without `--seed`.
pub fn random_seed() -> u64 {
    rand::rng().random()
}

/// Orders whose `total_amount` is still the 0.0 placeholder.
///
/// Totals are only known once order item generation has completed, so
/// the placeholder rows are held in a distinct type and the finalized
/// `Vec<Order>` does not exist until [`DraftOrders::finalize`] consumes
/// them. Payments are generated from the finalized orders only.
#[derive(Debug)]
pub struct DraftOrders(Vec<Order>);

impl DraftOrders {
    /// The placeholder rows, for the item-generation stage.
    pub fn orders(&self) -> &[Order] {
        &self.0
    }

    /// Back-fills each order's total from the accumulated line totals,
    /// rounded to 2 decimals.
    pub fn finalize(self, totals: &HashMap<u32, f64>) -> Vec<Order> {
        self.0
            .into_iter()
            .map(|mut order| {
                order.total_amount = round2(totals.get(&order.order_id).copied().unwrap_or(0.0));
                order
            })
            .collect()
    }
}

/// Runs the full pipeline and returns a consistent dataset.
pub fn generate(config: &GeneratorConfig) -> GenerateResult<Dataset> {
    let mut rng = StdRng::seed_from_u64(config.seed());
    let today = Utc::now().date_naive();

    info!(users = config.user_count(), "generating users");
    let users = generate_users(config.user_count(), today, &mut rng)?;

    info!(products = config.product_count(), "generating products");
    let products = generate_products(config.product_count(), &mut rng);

    info!(orders = config.order_count(), "generating orders");
    let drafts = generate_orders(config.order_count(), &users, today, &mut rng)?;

    info!("generating order items");
    let (order_items, totals) = generate_order_items(&drafts, &products, &mut rng);

    info!("finalizing order totals");
    let orders = drafts.finalize(&totals);

    info!("generating payments");
    let payments = generate_payments(&orders, today, &mut rng)?;

    Ok(Dataset {
        users,
        products,
        orders,
        order_items,
        payments,
    })
}

/// Generates `count` users with unique emails and phone numbers and a
/// signup date within the last two years.
pub fn generate_users(
    count: u32,
    today: NaiveDate,
    rng: &mut StdRng,
) -> GenerateResult<Vec<User>> {
    let signup_start = today - Duration::days(SIGNUP_WINDOW_DAYS);
    let mut emails = UniquePool::new();
    let mut phones = UniquePool::new();

    (1..=count)
        .map(|user_id| {
            Ok(User {
                user_id,
                full_name: names::full_name(rng),
                email: emails.draw(rng, "email", names::email_candidate)?,
                signup_date: date_between(rng, signup_start, today),
                phone_number: phones.draw(rng, "phone_number", names::phone_candidate)?,
            })
        })
        .collect()
}

/// Generates `count` products with a uniform category, price and stock.
pub fn generate_products(count: u32, rng: &mut StdRng) -> Vec<Product> {
    (1..=count)
        .map(|product_id| Product {
            product_id,
            product_name: names::product_name(rng),
            category: ProductCategory::ALL[rng.random_range(0..ProductCategory::ALL.len())],
            price: round2(rng.random_range(MIN_PRICE..=MAX_PRICE)),
            stock_quantity: rng.random_range(0..=MAX_STOCK),
        })
        .collect()
}

/// Generates `count` placeholder orders. Each order picks a user
/// uniformly with replacement; the order date is sampled from that
/// user's signup date onward so it can never precede it.
pub fn generate_orders(
    count: u32,
    users: &[User],
    today: NaiveDate,
    rng: &mut StdRng,
) -> GenerateResult<DraftOrders> {
    let status = Categorical::new(&ORDER_STATUS_WEIGHTS)?;
    let orders = (1..=count)
        .map(|order_id| {
            let user = &users[rng.random_range(0..users.len())];
            Order {
                order_id,
                user_id: user.user_id,
                order_date: date_between(rng, user.signup_date, today),
                total_amount: 0.0,
                order_status: status.sample(rng),
            }
        })
        .collect();
    Ok(DraftOrders(orders))
}

/// Generates 1 to 5 items per order and accumulates each order's
/// running total, keyed by order id.
///
/// The unit price is drawn within ±10% of the product base price;
/// every line total is rounded before it enters the accumulator so the
/// finalized order total equals the sum of the stored line totals.
pub fn generate_order_items(
    drafts: &DraftOrders,
    products: &[Product],
    rng: &mut StdRng,
) -> (Vec<OrderItem>, HashMap<u32, f64>) {
    let mut totals: HashMap<u32, f64> = HashMap::new();
    let mut items = Vec::new();
    let mut item_id = 1;

    for order in drafts.orders() {
        let item_count = rng.random_range(1..=MAX_ITEMS_PER_ORDER);
        for _ in 0..item_count {
            let product = &products[rng.random_range(0..products.len())];
            let quantity = rng.random_range(1..=MAX_QUANTITY);
            let unit_price = round2(rng.random_range(product.price * 0.9..=product.price * 1.1));
            let line_total = round2(quantity as f64 * unit_price);

            items.push(OrderItem {
                item_id,
                order_id: order.order_id,
                product_id: product.product_id,
                quantity,
                unit_price,
                line_total,
            });

            *totals.entry(order.order_id).or_insert(0.0) += line_total;
            item_id += 1;
        }
    }

    (items, totals)
}

/// Generates exactly one payment per finalized order, reusing the
/// order id as payment id.
pub fn generate_payments(
    orders: &[Order],
    today: NaiveDate,
    rng: &mut StdRng,
) -> GenerateResult<Vec<Payment>> {
    let status = Categorical::new(&PAYMENT_STATUS_WEIGHTS)?;
    Ok(orders
        .iter()
        .map(|order| {
            let payment_status = status.sample(rng);
            let amount_paid = if payment_status == PaymentStatus::Successful {
                round2(order.total_amount)
            } else {
                round2(rng.random_range(1.0..=order.total_amount.max(1.0)))
            };

            Payment {
                payment_id: order.order_id,
                order_id: order.order_id,
                payment_method: PaymentMethod::ALL
                    [rng.random_range(0..PaymentMethod::ALL.len())],
                payment_status,
                payment_date: date_between(rng, order.order_date, today),
                // Positivity floor matching the amount_paid > 0 check.
                amount_paid: amount_paid.max(0.01),
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use entities::money_eq;

    fn small_dataset(seed: u64) -> Dataset {
        let config = GeneratorConfig::new(40, seed).unwrap();
        generate(&config).unwrap()
    }

    #[test]
    fn test_zero_rows_rejected() {
        assert!(matches!(
            GeneratorConfig::new(0, 1),
            Err(GenerateError::InvalidRowCount(0))
        ));
    }

    #[test]
    fn test_derived_count_floors() {
        let config = GeneratorConfig::new(40, 1).unwrap();
        assert_eq!(config.user_count(), 50);
        assert_eq!(config.product_count(), 40);

        let config = GeneratorConfig::new(1000, 1).unwrap();
        assert_eq!(config.user_count(), 600);
        assert_eq!(config.product_count(), 500);
    }

    #[test]
    fn test_row_counts_and_unique_contact_fields() {
        let dataset = small_dataset(11);
        assert_eq!(dataset.users.len(), 50);
        assert_eq!(dataset.products.len(), 40);
        assert_eq!(dataset.orders.len(), 40);
        assert_eq!(dataset.payments.len(), 40);

        let emails: std::collections::HashSet<_> =
            dataset.users.iter().map(|u| u.email.as_str()).collect();
        let phones: std::collections::HashSet<_> = dataset
            .users
            .iter()
            .map(|u| u.phone_number.as_str())
            .collect();
        assert_eq!(emails.len(), dataset.users.len());
        assert_eq!(phones.len(), dataset.users.len());
    }

    #[test]
    fn test_order_totals_equal_item_sums() {
        let dataset = small_dataset(12);
        for order in &dataset.orders {
            let sum: f64 = dataset
                .order_items
                .iter()
                .filter(|item| item.order_id == order.order_id)
                .map(|item| item.line_total)
                .sum();
            assert!(
                money_eq(order.total_amount, round2(sum)),
                "order {} total {} != item sum {}",
                order.order_id,
                order.total_amount,
                round2(sum)
            );
            assert!(order.total_amount > 0.0);
        }
    }

    #[test]
    fn test_order_item_invariants() {
        let dataset = small_dataset(13);
        for item in &dataset.order_items {
            assert!((1..=5).contains(&item.quantity));
            assert!(money_eq(
                item.line_total,
                round2(item.quantity as f64 * item.unit_price)
            ));

            let product = &dataset.products[(item.product_id - 1) as usize];
            // Rounding can move the drawn price half a cent past the band.
            assert!(item.unit_price >= product.price * 0.9 - 0.005);
            assert!(item.unit_price <= product.price * 1.1 + 0.005);
        }
    }

    #[test]
    fn test_order_dates_respect_signup() {
        let dataset = small_dataset(14);
        for order in &dataset.orders {
            let user = &dataset.users[(order.user_id - 1) as usize];
            assert!(order.order_date >= user.signup_date);
        }
    }

    #[test]
    fn test_payment_invariants() {
        let dataset = small_dataset(15);
        assert_eq!(dataset.payments.len(), dataset.orders.len());
        for payment in &dataset.payments {
            let order = &dataset.orders[(payment.order_id - 1) as usize];
            assert_eq!(payment.payment_id, payment.order_id);
            assert!(payment.payment_date >= order.order_date);
            assert!(payment.amount_paid >= 0.01);
            if payment.payment_status == PaymentStatus::Successful {
                assert!(money_eq(payment.amount_paid, order.total_amount));
            } else {
                assert!(payment.amount_paid <= order.total_amount.max(1.0) + 0.005);
            }
        }
    }

    #[test]
    fn test_same_seed_reproduces_dataset() {
        assert_eq!(small_dataset(99), small_dataset(99));
    }

    #[test]
    fn test_product_bounds() {
        let dataset = small_dataset(16);
        for product in &dataset.products {
            assert!(product.price >= MIN_PRICE && product.price <= MAX_PRICE);
            assert!(product.stock_quantity <= MAX_STOCK);
        }
    }
}
