// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

#![no_main]

use hdds_codec::{Codec, Int64Codec};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let codec = Int64Codec::new();

    // Anything accepted must re-encode to a canonical form that decodes back
    if let Ok(n) = codec.decode(data) {
        let encoded = codec.encode(&n).expect("encode i64");
        assert_eq!(codec.decode(&encoded).expect("decode canonical"), n);

        let narrowed: Result<i32, _> = codec.decode_as(data);
        assert_eq!(narrowed.is_ok(), i32::try_from(n).is_ok());
    }
});
