/// Print only the verdict: `valid` or `invalid`.
pub fn print_minimal(valid: bool) {
    println!("{}", if valid { "valid" } else { "invalid" });
}
