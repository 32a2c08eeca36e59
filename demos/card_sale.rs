//! Example PayLane card sale.
//!
//! Performs a card sale against the configured endpoint and follows it with
//! a sale info lookup.
//!
//! Run with:
//! ```bash
//! cargo run --example card_sale
//! ```
//!
//! Environment variables (a `.env` file is honored):
//! - PAYLANE_USERNAME / PAYLANE_PASSWORD: merchant API credentials
//! - PAYLANE_API_URL: optional endpoint override, must end with `/`
//! - PAYLANE_SSL_VERIFY: set to `false` for sandbox hosts with self-signed certificates

use paylane_rs::client::{ClientConfig, PayLaneClient};
use paylane_rs::types::{Address, Card, CardSaleRequest, Customer, Sale, SaleInfoRequest};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = ClientConfig::from_env()?;
    println!("PayLane endpoint: {}", config.base_url);

    let client = PayLaneClient::with_config(config)?;

    let request = CardSaleRequest {
        sale: Sale {
            amount: 100.0,
            currency: "EUR".to_string(),
            description: "Product #1".to_string(),
        },
        customer: Customer {
            name: "John Doe".to_string(),
            email: "john@doe.com".to_string(),
            ip: "127.0.0.1".to_string(),
            address: Address {
                street_house: "1600 Pennsylvania Avenue Northwest".to_string(),
                city: "Washington".to_string(),
                state: Some("DC".to_string()),
                zip: "500".to_string(),
                country_code: "US".to_string(),
            },
        },
        card: Card {
            card_number: "4111111111111111".to_string(),
            expiration_month: "03".to_string(),
            expiration_year: "2030".to_string(),
            name_on_card: "John Doe".to_string(),
            card_code: "123".to_string(),
        },
    };

    let sale = client.card_sale(&request).await?;
    if !sale.is_success() {
        println!("Sale rejected: {:?}", sale.get("error"));
        return Ok(());
    }

    let id_sale = sale
        .get("id_sale")
        .and_then(|v| v.as_u64())
        .ok_or_else(|| anyhow::anyhow!("response carried no id_sale"))?;
    println!("Sale {} completed", id_sale);

    let info = client.get_sale_info(&SaleInfoRequest { id_sale }).await?;
    if let Some(data) = info.into_data() {
        println!("{}", serde_json::to_string_pretty(&data)?);
    }

    Ok(())
}
