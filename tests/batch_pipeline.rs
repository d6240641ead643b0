use std::io::Cursor;
use image::{ImageBuffer, Rgba, RgbaImage};
use graphite_gallery_lib::core::{BatchStatus, MAX_TAGS};
use graphite_gallery_lib::notify::NotificationKind;
use graphite_gallery_lib::utils::FailureKind;
use graphite_gallery_lib::{
    AppState, Asset, GalleryItem, Settings, TagSet, TransformEngine, TransformRequest, import_assets,
    run_batch_action,
};

fn png(width: u32, height: u32, pixel: impl Fn(u32, u32) -> Rgba<u8>) -> Vec<u8> {
    let img: RgbaImage = ImageBuffer::from_fn(width, height, pixel);
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, image::ImageFormat::Png).expect("encode png");
    out.into_inner()
}

fn decode(asset: &Asset) -> RgbaImage {
    image::load_from_memory(asset.bytes()).expect("decode").to_rgba8()
}

fn gallery(assets: Vec<Asset>) -> AppState {
    let mut state = AppState::new(Settings::default());
    import_assets(&mut state, assets);
    state
}

#[tokio::test]
async fn one_bad_item_does_not_stop_the_batch() {
    let good = png(40, 20, |_, _| Rgba([10, 20, 30, 255]));
    let mut state = gallery(vec![
        Asset::new("one.png", "image/png", good.clone()),
        Asset::new("broken.png", "image/png", vec![0u8, 1, 2, 3]),
        Asset::new("three.png", "image/png", good),
    ]);
    let sources: Vec<String> = state.items().iter().map(|i| i.id.clone()).collect();
    let mut status = state.subscribe_batch();

    let outcome = run_batch_action(&mut state, "Auto Enhance").await.expect("batch runs");

    assert_eq!(outcome.job.processed, 3);
    assert_eq!(outcome.job.total, 3);
    assert_eq!(outcome.produced.len(), 2);
    assert_eq!(outcome.job.failures.len(), 1);
    assert_eq!(outcome.job.failures[0].item_name, "broken.png");
    assert_eq!(outcome.job.failures[0].kind, FailureKind::SourceUnavailable);
    assert_eq!(outcome.job.status(), BatchStatus::CompletedWithErrors);

    // Produced items land at the front, in source order, sources untouched.
    let ids: Vec<&str> = state.items().iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids.len(), 5);
    assert_eq!(ids[0], format!("{}-proc", sources[0]));
    assert_eq!(ids[1], format!("{}-proc", sources[2]));
    assert_eq!(&ids[2..], sources.iter().map(String::as_str).collect::<Vec<_>>().as_slice());
    assert_eq!(state.items()[0].display_name, "PROCESSED_one.png");
    assert!(state.items()[0].tags.contains("processed"));

    let note = state.notifications().latest().expect("summary");
    assert_eq!(note.kind, NotificationKind::Warning);
    assert!(note.persistent);
    assert_eq!(state.notifications().len(), 2);

    assert!(status.has_changed().unwrap());
    let last = status.borrow_and_update().clone();
    assert!(!last.is_active);
    assert_eq!(last.processed, 3);
}

#[tokio::test]
async fn unknown_label_fails_every_item() {
    let mut state = gallery(vec![
        Asset::new("a.png", "image/png", png(4, 4, |_, _| Rgba([0, 0, 0, 255]))),
        Asset::new("b.png", "image/png", png(4, 4, |_, _| Rgba([0, 0, 0, 255]))),
    ]);

    let outcome = run_batch_action(&mut state, "Sparkle").await.expect("batch runs");

    assert!(outcome.produced.is_empty());
    assert_eq!(outcome.job.processed, 2);
    assert!(outcome.job.failures.iter().all(|f| f.kind == FailureKind::UnknownOperation));
    assert_eq!(state.items().len(), 2);
}

#[tokio::test]
async fn batch_targets_only_the_selection() {
    let mut state = gallery(vec![
        Asset::new("a.png", "image/png", png(4, 4, |_, _| Rgba([0, 0, 0, 255]))),
        Asset::new("b.png", "image/png", png(4, 4, |_, _| Rgba([0, 0, 0, 255]))),
    ]);
    let second = state.items()[1].id.clone();
    state.click_item(&second);

    let outcome = run_batch_action(&mut state, "Convert to JPG").await.expect("batch runs");

    assert_eq!(outcome.job.total, 1);
    let produced = &state.items()[0];
    assert_eq!(produced.id, format!("{second}-proc"));
    assert_eq!(produced.display_name, "PROCESSED_b.jpg");
    assert_eq!(produced.mime_type(), Some("image/jpeg"));

    let note = state.notifications().latest().expect("summary");
    assert_eq!(note.kind, NotificationKind::Success);
    assert!(!note.persistent);
}

#[tokio::test]
async fn processed_marker_respects_tag_limit() {
    let mut state = AppState::new(Settings::default());
    let tags = TagSet::try_from(vec!["a", "b", "c", "d", "e"].into_iter().map(String::from).collect::<Vec<_>>())
        .expect("five tags");
    let item = GalleryItem::new("full", Asset::new("full.png", "image/png", png(4, 4, |_, _| Rgba([9, 9, 9, 255]))))
        .with_tags(tags);
    state.append_items(vec![item]);

    run_batch_action(&mut state, "Batch Resize").await.expect("batch runs");

    let produced = state.item("full-proc").expect("derived item");
    assert_eq!(produced.tags.len(), MAX_TAGS);
    assert!(produced.tags.contains("processed"));
}

#[tokio::test]
async fn resize_keeps_aspect_ratio() {
    let asset = Asset::new("wide.png", "image/png", png(2400, 1200, |x, _| Rgba([(x % 256) as u8, 0, 0, 255])));
    let out = TransformEngine::default()
        .transform(asset, TransformRequest::resize(1200))
        .await
        .expect("resize");

    assert_eq!(out.mime_type(), "image/png");
    assert_eq!(decode(&out).dimensions(), (1200, 600));
}

#[tokio::test]
async fn watermark_marks_bottom_right_only() {
    let asset = Asset::new("dark.png", "image/png", png(1000, 800, |_, _| Rgba([0, 0, 0, 255])));
    let out = TransformEngine::default()
        .transform(asset, TransformRequest::watermark("X"))
        .await
        .expect("watermark");

    let img = decode(&out);
    assert_eq!(img.dimensions(), (1000, 800));
    assert_eq!(img.get_pixel(0, 0), &Rgba([0, 0, 0, 255]));
    assert_eq!(img.get_pixel(500, 400), &Rgba([0, 0, 0, 255]));

    let marked = (900..1000)
        .flat_map(|x| (700..800).map(move |y| (x, y)))
        .any(|(x, y)| img.get_pixel(x, y)[0] > 0);
    assert!(marked, "no watermark pixels near the bottom-right corner");
}

#[tokio::test]
async fn grayscale_is_idempotent() {
    let asset = Asset::new(
        "colour.png",
        "image/png",
        png(16, 16, |x, y| Rgba([(x * 16) as u8, (y * 16) as u8, 200, 255])),
    );
    let engine = TransformEngine::default();
    let once = engine.transform(asset, TransformRequest::Grayscale).await.expect("first pass");
    let twice = engine.transform(once.clone(), TransformRequest::Grayscale).await.expect("second pass");

    let a = decode(&once);
    assert!(a.pixels().all(|p| p[0] == p[1] && p[1] == p[2]));
    assert_eq!(a, decode(&twice));
}
