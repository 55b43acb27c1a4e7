//! Tests for the wallet clients.

use std::collections::HashMap;

use wiremock::matchers::{body_string_contains, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use bci_explorer::BitcoinValue;
use bci_http::{ApiConfig, BlockchainHttpClient};

use crate::creator::WalletCreator;
use crate::error::WalletError;
use crate::pusher::TransactionPusher;
use crate::receiver::FundReceiver;
use crate::wallet::Wallet;

fn transport(server: &MockServer) -> BlockchainHttpClient {
    BlockchainHttpClient::new(ApiConfig {
        base_url: server.uri(),
        ..Default::default()
    })
}

fn test_wallet(server: &MockServer) -> Wallet {
    Wallet::new(transport(server), "wallet-guid", "hunter2hunter2", None)
}

#[tokio::test]
async fn test_send_posts_payment_request() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/merchant/wallet-guid/payment"))
        .and(body_string_contains("\"to\":\"1Recipient\""))
        .and(body_string_contains("\"amount\":150000"))
        .and(body_string_contains("\"main_password\":\"hunter2hunter2\""))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "message": "Sent 0.0015 BTC to 1Recipient",
            "tx_hash": "deadbeef01"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = test_wallet(&server)
        .send(
            "1Recipient",
            BitcoinValue::from_satoshis(150_000),
            None,
            None,
            None,
        )
        .await
        .unwrap();

    assert_eq!(response.tx_hash, "deadbeef01");
    assert!(response.notice.is_none());
}

#[tokio::test]
async fn test_send_rejects_bad_arguments_before_any_request() {
    let server = MockServer::start().await;
    let wallet = test_wallet(&server);

    let result = wallet
        .send("", BitcoinValue::from_satoshis(1), None, None, None)
        .await;
    assert!(matches!(result, Err(WalletError::InvalidArgument(_))));

    let result = wallet
        .send("1Recipient", BitcoinValue::ZERO, None, None, None)
        .await;
    assert!(matches!(result, Err(WalletError::InvalidArgument(_))));

    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_send_many_requires_recipients() {
    let server = MockServer::start().await;
    let result = test_wallet(&server)
        .send_many(&HashMap::new(), None, None, None)
        .await;
    assert!(matches!(result, Err(WalletError::InvalidArgument(_))));
}

#[tokio::test]
async fn test_send_many_posts_satoshi_amounts() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/merchant/wallet-guid/sendmany"))
        .and(body_string_contains("\"1Recipient\":25000"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "message": "Sent To Multiple Recipients",
            "tx_hash": "deadbeef02"
        })))
        .mount(&server)
        .await;

    let mut recipients = HashMap::new();
    recipients.insert("1Recipient".to_string(), BitcoinValue::from_satoshis(25_000));

    let response = test_wallet(&server)
        .send_many(&recipients, None, None, None)
        .await
        .unwrap();
    assert_eq!(response.tx_hash, "deadbeef02");
}

#[tokio::test]
async fn test_get_balance() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/merchant/wallet-guid/balance"))
        .and(query_param("password", "hunter2hunter2"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "balance": 123_456_789 })),
        )
        .mount(&server)
        .await;

    let balance = test_wallet(&server).get_balance().await.unwrap();
    assert_eq!(balance.satoshis(), 123_456_789);
}

#[tokio::test]
async fn test_list_addresses() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/merchant/wallet-guid/list"))
        .and(query_param("confirmations", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            { "balance": 1000, "address": "1Addr1", "label": "savings", "total_received": 5000 },
            { "balance": 0, "address": "1Addr2", "total_received": 0 }
        ])))
        .mount(&server)
        .await;

    let addresses = test_wallet(&server).list_addresses(3).await.unwrap();

    assert_eq!(addresses.len(), 2);
    assert_eq!(addresses[0].label.as_deref(), Some("savings"));
    assert_eq!(addresses[1].balance, BitcoinValue::ZERO);
}

#[tokio::test]
async fn test_new_address_with_label() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/merchant/wallet-guid/new_address"))
        .and(query_param("label", "donations"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "balance": 0, "address": "1Fresh", "label": "donations", "total_received": 0
        })))
        .mount(&server)
        .await;

    let address = test_wallet(&server)
        .new_address(Some("donations"))
        .await
        .unwrap();
    assert_eq!(address.address, "1Fresh");
}

#[tokio::test]
async fn test_archive_and_unarchive() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/merchant/wallet-guid/archive_address"))
        .and(query_param("address", "1Old"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "archived": "1Old" })),
        )
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/merchant/wallet-guid/unarchive_address"))
        .and(query_param("address", "1Old"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "active": "1Old" })),
        )
        .mount(&server)
        .await;

    let wallet = test_wallet(&server);
    assert_eq!(wallet.archive_address("1Old").await.unwrap(), "1Old");
    assert_eq!(wallet.unarchive_address("1Old").await.unwrap(), "1Old");
}

#[tokio::test]
async fn test_consolidate() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/merchant/wallet-guid/auto_consolidate"))
        .and(query_param("days", "60"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "consolidated": ["1Dormant1", "1Dormant2"]
        })))
        .mount(&server)
        .await;

    let consolidated = test_wallet(&server).consolidate(60).await.unwrap();
    assert_eq!(consolidated, vec!["1Dormant1", "1Dormant2"]);
}

#[tokio::test]
async fn test_create_wallet() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v2/create_wallet"))
        .and(body_string_contains("password=correct-horse"))
        .and(body_string_contains("label=first"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "guid": "4b8cd8e9-9480-44cc-b7f2-527e98ee3287",
            "address": "1NewWalletAddr",
            "link": "https://blockchain.info/wallet/4b8cd8e9"
        })))
        .mount(&server)
        .await;

    let creator = WalletCreator::new(transport(&server));
    let response = creator
        .create("correct-horse", None, Some("first"), None)
        .await
        .unwrap();

    assert_eq!(response.identifier, "4b8cd8e9-9480-44cc-b7f2-527e98ee3287");
    assert_eq!(response.address, "1NewWalletAddr");
}

#[tokio::test]
async fn test_create_wallet_blank_password() {
    let server = MockServer::start().await;
    let creator = WalletCreator::new(transport(&server));
    let result = creator.create(" ", None, None, None).await;
    assert!(matches!(result, Err(WalletError::InvalidArgument(_))));
}

#[tokio::test]
async fn test_receive_funds() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/receive"))
        .and(body_string_contains("address=1Destination"))
        .and(body_string_contains("method=create"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "fee_percent": 0,
            "destination": "1Destination",
            "input_address": "1Forwarding",
            "callback_url": "https://example.com/cb"
        })))
        .mount(&server)
        .await;

    let receiver = FundReceiver::new(transport(&server));
    let response = receiver
        .receive("1Destination", "https://example.com/cb")
        .await
        .unwrap();

    assert_eq!(response.input_address, "1Forwarding");
    assert_eq!(response.destination_address, "1Destination");
}

#[tokio::test]
async fn test_receive_funds_blank_arguments() {
    let server = MockServer::start().await;
    let receiver = FundReceiver::new(transport(&server));

    let result = receiver.receive("", "https://example.com/cb").await;
    assert!(matches!(result, Err(WalletError::InvalidArgument(_))));

    let result = receiver.receive("1Destination", " ").await;
    assert!(matches!(result, Err(WalletError::InvalidArgument(_))));
}

#[tokio::test]
async fn test_push_transaction() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/pushtx"))
        .and(body_string_contains("tx=0100000001ab"))
        .respond_with(ResponseTemplate::new(200).set_body_string("Transaction Submitted"))
        .expect(1)
        .mount(&server)
        .await;

    let pusher = TransactionPusher::new(transport(&server));
    pusher.push_transaction("0100000001ab").await.unwrap();
}

#[tokio::test]
async fn test_push_transaction_rejects_non_hex() {
    let server = MockServer::start().await;
    let pusher = TransactionPusher::new(transport(&server));

    let result = pusher.push_transaction("").await;
    assert!(matches!(result, Err(WalletError::InvalidArgument(_))));

    let result = pusher.push_transaction("not-hex!").await;
    assert!(matches!(result, Err(WalletError::InvalidArgument(_))));

    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_payment_server_error_propagates() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/merchant/wallet-guid/payment"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Insufficient funds"))
        .mount(&server)
        .await;

    let result = test_wallet(&server)
        .send(
            "1Recipient",
            BitcoinValue::from_satoshis(1),
            None,
            None,
            None,
        )
        .await;

    match result.unwrap_err() {
        WalletError::Api(bci_http::ApiError::Server { message, .. }) => {
            assert!(message.contains("Insufficient funds"));
        }
        other => panic!("expected server error, got {:?}", other),
    }
}
