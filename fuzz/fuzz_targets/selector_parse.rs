use honggfuzz::fuzz;
use selgrind::Selector;

fn main() {
    loop {
        fuzz!(|data: &[u8]| {
            if let Ok(s) = std::str::from_utf8(data) {
                if let Ok(sel) = Selector::from_hex(s) {
                    assert_eq!(Selector::from_hex(&sel.to_string()).ok(), Some(sel));
                }
            }
        });
    }
}
