//! The SSE decoder must not depend on how the stream is chunked

use dataqueue::egui_app::realtime::{SseDecoder, SseEvent};
use proptest::prelude::*;

fn wire(payloads: &[String]) -> Vec<u8> {
    let mut out = String::from(": keep-alive\n\n");
    for payload in payloads {
        out.push_str("event: snapshot\r\n");
        out.push_str(&format!("data: {}\r\n\r\n", payload));
    }
    out.into_bytes()
}

proptest! {
    #[test]
    fn split_point_does_not_change_events(
        payloads in proptest::collection::vec("[a-zA-Z0-9{}\\[\\],:\" ]{0,24}", 1..6),
        split in any::<prop::sample::Index>(),
    ) {
        let bytes = wire(&payloads);
        let at = split.index(bytes.len() + 1);

        let mut whole = SseDecoder::new();
        let expected = whole.push(&bytes);

        let mut chunked = SseDecoder::new();
        let mut actual: Vec<SseEvent> = chunked.push(&bytes[..at]);
        actual.extend(chunked.push(&bytes[at..]));

        prop_assert_eq!(&actual, &expected);
        prop_assert_eq!(actual.len(), payloads.len());
        for (event, payload) in actual.iter().zip(&payloads) {
            prop_assert_eq!(&event.event, "snapshot");
            prop_assert_eq!(&event.data, payload);
        }
    }
}
