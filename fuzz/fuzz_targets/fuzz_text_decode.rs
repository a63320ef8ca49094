// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

#![no_main]

use hdds_codec::{Codec, TextCodec};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let codec = TextCodec::new();

    match codec.decode(data) {
        Ok(text) => {
            assert_eq!(codec.encode(&text).expect("encode text"), data);
            assert_eq!(codec.decode_lossy(data), text);
        }
        Err(_) => assert!(std::str::from_utf8(data).is_err()),
    }
});
