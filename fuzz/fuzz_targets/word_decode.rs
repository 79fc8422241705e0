use honggfuzz::fuzz;
use selgrind::{decode_word_slice, encode_word};

fn main() {
    loop {
        fuzz!(|data: &[u8]| {
            // must never panic; any accepted word re-encodes to the input
            if let Ok(n) = decode_word_slice(data) {
                assert_eq!(&encode_word(n)[..], data);
            }
        });
    }
}
