use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderItem {
    pub item: String,
    pub amount: u32,
    pub price: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    pub number: String,
    pub contents: Vec<OrderItem>,
}

impl Order {
    /// Sum of `price * amount` over all line items.
    pub fn total(&self) -> f64 {
        self.contents
            .iter()
            .map(|i| i.price * f64::from(i.amount))
            .sum()
    }
}

fn item(name: &str, amount: u32, price: f64) -> OrderItem {
    OrderItem {
        item: name.to_string(),
        amount,
        price,
    }
}

#[derive(Default)]
pub struct OrderStore {
    orders: RwLock<Vec<Order>>,
}

impl OrderStore {
    pub fn new(orders: Vec<Order>) -> Self {
        Self {
            orders: RwLock::new(orders),
        }
    }

    /// Store pre-filled with the two sample orders served at startup.
    pub fn with_sample_orders() -> Self {
        Self::new(vec![
            Order {
                number: "2020-04-06-01".to_string(),
                contents: vec![
                    item("Ham Sandwich", 2, 5.50),
                    item("Water", 1, 1.50),
                    item("Beer", 3, 2.30),
                    item("Cheesecake", 1, 3.75),
                ],
            },
            Order {
                number: "2020-04-03-01".to_string(),
                contents: vec![
                    item("Cheeseburger", 1, 8.50),
                    item("Water", 2, 1.50),
                    item("Coke", 2, 1.76),
                    item("Ice Cream", 1, 2.35),
                ],
            },
        ])
    }

    pub async fn list(&self) -> Vec<Order> {
        self.orders.read().await.clone()
    }

    pub async fn find(&self, number: &str) -> Option<Order> {
        self.orders
            .read()
            .await
            .iter()
            .find(|o| o.number == number)
            .cloned()
    }
}
