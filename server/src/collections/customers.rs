use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

#[derive(Default)]
pub struct CustomerStore {
    customers: RwLock<Vec<Customer>>,
}

impl CustomerStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn list(&self) -> Vec<Customer> {
        self.customers.read().await.clone()
    }

    /// First customer with a matching id.
    pub async fn find(&self, id: &str) -> Option<Customer> {
        self.customers
            .read()
            .await
            .iter()
            .find(|c| c.id == id)
            .cloned()
    }

    pub async fn add(&self, customer: Customer) {
        self.customers.write().await.push(customer);
    }

    /// Remove every customer with this id. Returns whether any was removed.
    pub async fn remove(&self, id: &str) -> bool {
        let mut customers = self.customers.write().await;
        let before = customers.len();
        customers.retain(|c| c.id != id);
        customers.len() != before
    }
}
