//! SQL schema definition.
//!
//! Check constraints mirror the generator's invariants exactly so a
//! corrupted or hand-edited CSV is rejected by SQLite rather than
//! silently inserted.

/// Tables in child-first order, safe for dropping under foreign keys.
pub(crate) const DROP_ORDER: [&str; 5] =
    ["payments", "order_items", "orders", "products", "users"];

/// Tables in parent-first insert order.
pub(crate) const INSERT_ORDER: [&str; 5] =
    ["users", "products", "orders", "order_items", "payments"];

/// SQL schema definition
pub(crate) const SCHEMA_SQL: &str = r#"
-- Users table
CREATE TABLE IF NOT EXISTS users (
    user_id INTEGER PRIMARY KEY,
    full_name TEXT NOT NULL,
    email TEXT UNIQUE NOT NULL,
    signup_date TEXT NOT NULL,
    phone_number TEXT UNIQUE
);

-- Products table
CREATE TABLE IF NOT EXISTS products (
    product_id INTEGER PRIMARY KEY,
    product_name TEXT NOT NULL,
    category TEXT CHECK(category IN ('electronics','fashion','home','beauty','books','sports')),
    price REAL CHECK(price > 0),
    stock_quantity INTEGER CHECK(stock_quantity >= 0)
);

-- Orders table
CREATE TABLE IF NOT EXISTS orders (
    order_id INTEGER PRIMARY KEY,
    user_id INTEGER NOT NULL REFERENCES users(user_id),
    order_date TEXT NOT NULL,
    total_amount REAL CHECK(total_amount > 0),
    order_status TEXT CHECK(order_status IN ('pending','completed','cancelled'))
);

-- Order items table
CREATE TABLE IF NOT EXISTS order_items (
    item_id INTEGER PRIMARY KEY,
    order_id INTEGER NOT NULL REFERENCES orders(order_id),
    product_id INTEGER NOT NULL REFERENCES products(product_id),
    quantity INTEGER CHECK(quantity > 0),
    unit_price REAL CHECK(unit_price > 0),
    line_total REAL CHECK(line_total >= 0)
);

-- Payments table (1:1 with orders, payment_id reuses the order id)
CREATE TABLE IF NOT EXISTS payments (
    payment_id INTEGER PRIMARY KEY,
    order_id INTEGER NOT NULL REFERENCES orders(order_id),
    payment_method TEXT CHECK(payment_method IN ('credit_card','debit_card','upi','net_banking')),
    payment_status TEXT CHECK(payment_status IN ('successful','failed','pending')),
    payment_date TEXT NOT NULL,
    amount_paid REAL CHECK(amount_paid > 0)
);
"#;
