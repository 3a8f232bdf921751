#![no_main]
use libfuzzer_sys::fuzz_target;
use sipc_codec::{unframe, Unframed};

fuzz_target!(|data: &[u8]| {
    let mut buf = data.to_vec();
    if let Ok(Unframed::Message { mut cursor, .. }) = unframe(&mut buf) {
        if cursor.start().is_err() {
            return;
        }
        for _ in 0..4096 {
            match cursor.any() {
                Ok(sipc_codec::Atom::End) | Err(_) => break,
                Ok(_) => {}
            }
        }
    }
});
