//! Encode and decode view states driven against the mock service.

mod common;

use std::time::{Duration, Instant};

use common::{MockResponse, MockService, client_for, png_bytes};
use eframe::egui;
use stego_toolkit::image_file::ImageFile;
use stego_toolkit::method::StegoMethod;
use stego_toolkit::state::{DecodeState, EncodeState, StateEvent};

fn select_png(name: &str) -> Result<ImageFile, stego_toolkit::image_file::ImageFileError> {
    ImageFile::from_bytes(Some(name.to_string()), png_bytes())
}

async fn settle_encode(state: &mut EncodeState, ctx: &egui::Context) -> Vec<StateEvent> {
    for _ in 0..400 {
        let events = state.poll(ctx);
        if !state.is_submitting() {
            return events;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    panic!("encode request did not settle");
}

async fn settle_decode(state: &mut DecodeState, ctx: &egui::Context) -> Vec<StateEvent> {
    for _ in 0..400 {
        let events = state.poll(ctx);
        if !state.is_submitting() {
            return events;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    panic!("decode request did not settle");
}

#[tokio::test]
async fn test_encode_success() {
    let service = MockService::start().await;
    let client = client_for(&service);
    let ctx = egui::Context::default();
    service.enqueue(MockResponse::image(b"stego-bytes")).await;

    let mut state = EncodeState::default();
    state.method = StegoMethod::Gray;
    state.select(&ctx, select_png("cat.png"));
    state.message = "meet at noon".to_string();
    assert!(state.can_submit());

    assert!(state.submit(&client).is_some());
    assert!(state.is_submitting());
    assert!(!state.can_submit());

    let events = settle_encode(&mut state, &ctx).await;
    assert!(events.contains(&StateEvent::StatusMessage(
        "Message encoded successfully".to_string()
    )));
    assert_eq!(state.result().unwrap().bytes, b"stego-bytes");
    assert!(state.error().is_none());

    let requests = service.requests().await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].path, "/encode/gray");
}

#[tokio::test]
async fn test_submit_while_pending_is_ignored() {
    let service = MockService::start().await;
    let client = client_for(&service);
    let ctx = egui::Context::default();
    service
        .enqueue(MockResponse::image(b"slow").with_delay(200))
        .await;

    let mut state = EncodeState::default();
    state.select(&ctx, select_png("cat.png"));
    state.message = "once".to_string();

    assert!(state.submit(&client).is_some());
    assert!(state.submit(&client).is_none());
    assert!(state.submit(&client).is_none());

    settle_encode(&mut state, &ctx).await;
    assert_eq!(service.requests().await.len(), 1);
    assert!(state.result().is_some());
}

#[tokio::test]
async fn test_decode_submit_while_pending_is_ignored() {
    let service = MockService::start().await;
    let client = client_for(&service);
    let ctx = egui::Context::default();
    service
        .enqueue(MockResponse::json(200, r#"{"message":"x"}"#).with_delay(200))
        .await;

    let mut state = DecodeState::default();
    state.select(&ctx, select_png("enc.png"));

    assert!(state.submit(&client).is_some());
    assert!(!state.can_submit());
    assert!(state.submit(&client).is_none());
    assert!(state.submit(&client).is_none());

    settle_decode(&mut state, &ctx).await;
    let requests = service.requests().await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].path, "/decode/color");
    assert_eq!(state.message(), Some("x"));
}

#[tokio::test]
async fn test_encode_failure_keeps_inputs_for_retry() {
    let service = MockService::start().await;
    let client = client_for(&service);
    let ctx = egui::Context::default();
    service
        .enqueue(MockResponse::json(400, r#"{"detail":"Message too long for image"}"#))
        .await;
    service.enqueue(MockResponse::image(b"ok")).await;

    let mut state = EncodeState::default();
    state.select(&ctx, select_png("cat.png"));
    state.message = "a very long message".to_string();
    state.submit(&client);

    let events = settle_encode(&mut state, &ctx).await;
    assert!(events.contains(&StateEvent::LogError(
        "Encoding failed: Message too long for image".to_string()
    )));
    assert_eq!(state.error(), Some("Message too long for image"));
    assert!(state.result().is_none());
    assert_eq!(state.message, "a very long message");
    assert_eq!(state.selected().unwrap().file.name(), Some("cat.png"));

    // Retry clears the failure
    state.submit(&client);
    assert!(state.error().is_none());
    settle_encode(&mut state, &ctx).await;
    assert_eq!(state.result().unwrap().bytes, b"ok");
}

#[tokio::test]
async fn test_blocked_submissions_never_reach_the_service() {
    let service = MockService::start().await;
    let client = client_for(&service);
    let ctx = egui::Context::default();

    let mut encode = EncodeState::default();
    encode.message = "no image".to_string();
    assert!(encode.submit(&client).is_none());

    encode.select(&ctx, select_png("cat.png"));
    encode.message = "   ".to_string();
    assert!(encode.submit(&client).is_none());
    assert_eq!(encode.error(), Some("Please enter a message to encode"));

    let mut decode = DecodeState::default();
    assert!(decode.submit(&client).is_none());
    assert_eq!(decode.error(), Some("Please select an encoded image"));

    tokio::time::sleep(Duration::from_millis(20)).await;
    assert!(service.requests().await.is_empty());
}

#[tokio::test]
async fn test_decode_success_and_copy() {
    let service = MockService::start().await;
    let client = client_for(&service);
    let ctx = egui::Context::default();
    service
        .enqueue(MockResponse::json(200, r#"{"text":"hidden words"}"#))
        .await;

    let mut state = DecodeState::default();
    state.method = StegoMethod::Strings;
    state.select(&ctx, select_png("encoded_cat.png"));
    assert!(state.submit(&client).is_some());

    settle_decode(&mut state, &ctx).await;
    assert_eq!(state.message(), Some("hidden words"));
    assert_eq!(service.requests().await[0].path, "/decode/strings");

    assert!(state.copy(&ctx).is_some());
    assert!(state.copied(Instant::now()));
}

#[tokio::test]
async fn test_decode_empty_message_reports_nothing_found() {
    let service = MockService::start().await;
    let client = client_for(&service);
    let ctx = egui::Context::default();
    service.enqueue(MockResponse::json(200, "{}")).await;

    let mut state = DecodeState::default();
    state.select(&ctx, select_png("plain.png"));
    state.submit(&client);

    let events = settle_decode(&mut state, &ctx).await;
    assert!(events.contains(&StateEvent::StatusMessage(
        "No hidden message found".to_string()
    )));
    assert_eq!(state.message(), Some(""));
    assert!(state.copy(&ctx).is_none());
}

#[tokio::test]
async fn test_save_encoded_image() {
    let service = MockService::start().await;
    let client = client_for(&service);
    let ctx = egui::Context::default();
    let payload = png_bytes();
    service.enqueue(MockResponse::image(&payload)).await;

    let mut state = EncodeState::default();
    state.select(&ctx, select_png("holiday.png"));
    state.message = "x".to_string();
    state.submit(&client);
    settle_encode(&mut state, &ctx).await;

    let name = state.download_filename();
    assert_eq!(name, "encoded_holiday.png");

    let dir = tempfile::tempdir().unwrap();
    let saved = state.save_result(&dir.path().join(&name)).unwrap();
    assert_eq!(std::fs::read(saved).unwrap(), payload);
}

#[tokio::test]
async fn test_reset_mid_request_discards_result() {
    let service = MockService::start().await;
    let client = client_for(&service);
    let ctx = egui::Context::default();
    service
        .enqueue(MockResponse::image(b"late").with_delay(100))
        .await;

    let mut state = EncodeState::default();
    state.select(&ctx, select_png("cat.png"));
    state.message = "bye".to_string();
    state.submit(&client);
    state.reset();

    tokio::time::sleep(Duration::from_millis(200)).await;
    assert!(state.poll(&ctx).is_empty());
    assert!(state.result().is_none());
    assert!(!state.is_submitting());
}
