use rust_decimal::Decimal;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use bitfinex_api_client::rest::BitfinexRestClient;
use bitfinex_api_client::rest::public::{
    Book, BookRequest, CandlesRequest, Ticker, TickersHistoryRequest, TickersRequest, Trades,
    TradesRequest,
};
use bitfinex_api_client::{BitfinexError, PlatformStatus, Precision};

fn build_public_client(server: &MockServer) -> BitfinexRestClient {
    BitfinexRestClient::builder().base_url(server.uri()).build()
}

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

#[tokio::test]
async fn test_get_platform_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/platform/status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([1])))
        .mount(&server)
        .await;

    let client = build_public_client(&server);
    let status = client.get_platform_status().await.unwrap();
    assert_eq!(status, PlatformStatus::Operative);
}

#[tokio::test]
async fn test_get_trading_ticker() {
    let server = MockServer::start().await;
    let response = serde_json::json!([
        30000.1, 10.5, 30000.2, 8.25, 150.0, 0.005, 30000.15, 1234.56, 30500.0, 29500.0
    ]);

    Mock::given(method("GET"))
        .and(path("/v2/ticker/tBTCUSD"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let client = build_public_client(&server);
    let ticker = client.get_ticker("tBTCUSD").await.unwrap();
    match &ticker {
        Ticker::Trading(t) => {
            assert_eq!(t.bid, dec("30000.1"));
            assert_eq!(t.ask, dec("30000.2"));
            assert_eq!(t.daily_change_perc, dec("0.005"));
            assert_eq!(t.low, dec("29500"));
        }
        other => panic!("expected trading ticker, got {other:?}"),
    }
    assert_eq!(ticker.last_price(), dec("30000.15"));
}

#[tokio::test]
async fn test_get_funding_ticker() {
    let server = MockServer::start().await;
    // Slots 13 and 14 are undocumented placeholders.
    let response = serde_json::json!([
        0.0003, 0.0002, 30, 50000000.0, 0.00025, 2, 30000000.0,
        0.00001, 0.0417, 0.00024, 100000000.0, 0.0003, 0.0001,
        null, null, 2000000.0
    ]);

    Mock::given(method("GET"))
        .and(path("/v2/ticker/fUSD"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let client = build_public_client(&server);
    let ticker = client.get_ticker("fUSD").await.unwrap();
    match ticker {
        Ticker::Funding(f) => {
            assert_eq!(f.frr, dec("0.0003"));
            assert_eq!(f.bid_period, 30);
            assert_eq!(f.ask_period, 2);
            assert_eq!(f.frr_amount_available, dec("2000000"));
        }
        other => panic!("expected funding ticker, got {other:?}"),
    }
}

#[tokio::test]
async fn test_get_ticker_unknown_symbol_fails_before_transport() {
    let server = MockServer::start().await;

    let client = build_public_client(&server);
    let error = client.get_ticker("BTCUSD").await.unwrap_err();
    assert!(matches!(error, BitfinexError::UnknownSymbol(_)));

    let requests = server.received_requests().await.unwrap();
    assert!(requests.is_empty());
}

#[tokio::test]
async fn test_get_tickers_dispatches_rows_on_prefix() {
    let server = MockServer::start().await;
    let response = serde_json::json!([
        ["tBTCUSD", 30000.1, 10.5, 30000.2, 8.25, 150.0, 0.005, 30000.15, 1234.56, 30500.0, 29500.0],
        ["fUSD", 0.0003, 0.0002, 30, 50000000.0, 0.00025, 2, 30000000.0,
         0.00001, 0.0417, 0.00024, 100000000.0, 0.0003, 0.0001, null, null, 2000000.0]
    ]);

    Mock::given(method("GET"))
        .and(path("/v2/tickers"))
        .and(query_param("symbols", "tBTCUSD,fUSD"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let client = build_public_client(&server);
    let request = TickersRequest::new(["tBTCUSD", "fUSD"]);
    let tickers = client.get_tickers(&request).await.unwrap();

    assert_eq!(tickers.len(), 2);
    assert_eq!(tickers[0].symbol, "tBTCUSD");
    assert!(matches!(tickers[0].ticker, Ticker::Trading(_)));
    assert_eq!(tickers[1].symbol, "fUSD");
    assert!(matches!(tickers[1].ticker, Ticker::Funding(_)));
}

#[tokio::test]
async fn test_get_tickers_all() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/tickers"))
        .and(query_param("symbols", "ALL"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&server)
        .await;

    let client = build_public_client(&server);
    let tickers = client.get_tickers(&TickersRequest::all()).await.unwrap();
    assert!(tickers.is_empty());
}

#[tokio::test]
async fn test_get_tickers_history() {
    let server = MockServer::start().await;
    let response = serde_json::json!([
        ["tBTCUSD", 30000.1, null, 30000.2, null, null, null, null, null, null, null, null,
         1700000000000i64]
    ]);

    Mock::given(method("GET"))
        .and(path("/v2/tickers/hist"))
        .and(query_param("symbols", "ALL"))
        .and(query_param("limit", "50"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let client = build_public_client(&server);
    let request = TickersHistoryRequest::all().limit(50);
    let history = client.get_tickers_history(&request).await.unwrap();

    assert_eq!(history.len(), 1);
    assert_eq!(history[0].symbol, "tBTCUSD");
    assert_eq!(history[0].bid, dec("30000.1"));
    assert_eq!(history[0].ask, dec("30000.2"));
    assert_eq!(history[0].mts, 1_700_000_000_000);
}

#[tokio::test]
async fn test_get_tickers_history_rejects_short_rows() {
    let server = MockServer::start().await;
    let response = serde_json::json!([["tBTCUSD", 30000.1, null, 30000.2]]);

    Mock::given(method("GET"))
        .and(path("/v2/tickers/hist"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let client = build_public_client(&server);
    let error = client
        .get_tickers_history(&TickersHistoryRequest::all())
        .await
        .unwrap_err();
    assert!(matches!(error, BitfinexError::InvalidResponse(_)));
}

#[tokio::test]
async fn test_get_trading_trades() {
    let server = MockServer::start().await;
    let response = serde_json::json!([
        [1234567890i64, 1700000000000i64, 0.05, 30000.5],
        [1234567891i64, 1700000000500i64, -0.02, 30001.0]
    ]);

    Mock::given(method("GET"))
        .and(path("/v2/trades/tBTCUSD/hist"))
        .and(query_param("limit", "2"))
        .and(query_param("sort", "-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let client = build_public_client(&server);
    let request = TradesRequest::new().limit(2).sort(-1);
    let trades = client.get_trades("tBTCUSD", &request).await.unwrap();

    match trades {
        Trades::Trading(rows) => {
            assert_eq!(rows.len(), 2);
            assert_eq!(rows[0].id, 1234567890);
            assert_eq!(rows[0].amount, dec("0.05"));
            assert_eq!(rows[1].price, dec("30001"));
        }
        other => panic!("expected trading trades, got {other:?}"),
    }
}

#[tokio::test]
async fn test_get_funding_trades() {
    let server = MockServer::start().await;
    let response = serde_json::json!([
        [140000001i64, 1700000000000i64, -500.0, 0.00021, 30]
    ]);

    Mock::given(method("GET"))
        .and(path("/v2/trades/fUSD/hist"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let client = build_public_client(&server);
    let trades = client
        .get_trades("fUSD", &TradesRequest::new())
        .await
        .unwrap();

    match trades {
        Trades::Funding(rows) => {
            assert_eq!(rows.len(), 1);
            assert_eq!(rows[0].rate, dec("0.00021"));
            assert_eq!(rows[0].period, 30);
        }
        other => panic!("expected funding trades, got {other:?}"),
    }
}

#[tokio::test]
async fn test_get_trading_book_aggregated() {
    let server = MockServer::start().await;
    let response = serde_json::json!([
        [30000.0, 3, 1.5],
        [30000.2, 2, -0.75]
    ]);

    Mock::given(method("GET"))
        .and(path("/v2/book/tBTCUSD/P0"))
        .and(query_param("len", "25"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let client = build_public_client(&server);
    let book = client
        .get_book("tBTCUSD", Precision::P0, &BookRequest::new().len(25))
        .await
        .unwrap();

    match book {
        Book::Trading(levels) => {
            assert_eq!(levels.len(), 2);
            assert_eq!(levels[0].price, dec("30000"));
            assert_eq!(levels[0].count, 3);
            assert_eq!(levels[1].amount, dec("-0.75"));
        }
        other => panic!("expected trading book, got {other:?}"),
    }
}

#[tokio::test]
async fn test_get_funding_book_aggregated() {
    let server = MockServer::start().await;
    let response = serde_json::json!([
        [0.00025, 30, 5, -1000000.0]
    ]);

    Mock::given(method("GET"))
        .and(path("/v2/book/fUSD/P0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let client = build_public_client(&server);
    let book = client
        .get_book("fUSD", Precision::P0, &BookRequest::new())
        .await
        .unwrap();

    match book {
        Book::Funding(levels) => {
            assert_eq!(levels[0].rate, dec("0.00025"));
            assert_eq!(levels[0].period, 30);
            assert_eq!(levels[0].count, 5);
        }
        other => panic!("expected funding book, got {other:?}"),
    }
}

#[tokio::test]
async fn test_get_trading_book_raw() {
    let server = MockServer::start().await;
    let response = serde_json::json!([
        [55804480163i64, 30000.0, 1.5]
    ]);

    Mock::given(method("GET"))
        .and(path("/v2/book/tBTCUSD/R0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let client = build_public_client(&server);
    let book = client
        .get_book("tBTCUSD", Precision::R0, &BookRequest::new())
        .await
        .unwrap();

    match book {
        Book::RawTrading(orders) => {
            assert_eq!(orders[0].order_id, 55804480163);
            assert_eq!(orders[0].price, dec("30000"));
        }
        other => panic!("expected raw trading book, got {other:?}"),
    }
}

#[tokio::test]
async fn test_get_funding_book_raw() {
    let server = MockServer::start().await;
    let response = serde_json::json!([
        [658282397i64, 30, 0.000233, -530.0]
    ]);

    Mock::given(method("GET"))
        .and(path("/v2/book/fUSD/R0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let client = build_public_client(&server);
    let book = client
        .get_book("fUSD", Precision::R0, &BookRequest::new())
        .await
        .unwrap();

    match book {
        Book::RawFunding(offers) => {
            assert_eq!(offers[0].offer_id, 658282397);
            assert_eq!(offers[0].period, 30);
            assert_eq!(offers[0].rate, dec("0.000233"));
        }
        other => panic!("expected raw funding book, got {other:?}"),
    }
}

#[tokio::test]
async fn test_get_candles() {
    let server = MockServer::start().await;
    let response = serde_json::json!([
        [1700000000000i64, 30000.0, 30010.0, 30050.0, 29990.0, 12.34],
        [1700000060000i64, 30010.0, 30020.0, 30030.0, 30000.0, 8.5]
    ]);

    Mock::given(method("GET"))
        .and(path("/v2/candles/trade:1m:tBTCUSD/hist"))
        .and(query_param("limit", "2"))
        .and(query_param("sort", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let client = build_public_client(&server);
    let request = CandlesRequest::new("1m", "tBTCUSD").limit(2).sort(1);
    let candles = client.get_candles(&request).await.unwrap();

    assert_eq!(candles.len(), 2);
    assert_eq!(candles[0].mts, 1_700_000_000_000);
    assert_eq!(candles[0].open, dec("30000"));
    assert_eq!(candles[0].close, dec("30010"));
    assert_eq!(candles[1].volume, dec("8.5"));
}

#[tokio::test]
async fn test_get_last_candle() {
    let server = MockServer::start().await;
    let response = serde_json::json!([1700000000000i64, 30000.0, 30010.0, 30050.0, 29990.0, 12.34]);

    Mock::given(method("GET"))
        .and(path("/v2/candles/trade:1h:tBTCUSD/last"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let client = build_public_client(&server);
    let candle = client.get_last_candle("1h", "tBTCUSD").await.unwrap();
    assert_eq!(candle.high, dec("30050"));
    assert_eq!(candle.low, dec("29990"));
}
