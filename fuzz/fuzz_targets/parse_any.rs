#![no_main]
use libfuzzer_sys::fuzz_target;
use sipc_codec::Cursor;

fuzz_target!(|data: &[u8]| {
    let mut buf = data.to_vec();
    buf.push(b'\n');
    let Ok(mut cursor) = Cursor::init(&mut buf) else {
        return;
    };
    if cursor.start().is_err() {
        return;
    }
    for _ in 0..4096 {
        match cursor.any() {
            Ok(sipc_codec::Atom::End) | Err(_) => break,
            Ok(_) => {}
        }
    }
});
