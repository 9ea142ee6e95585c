//! Node code generation.
//!
//! WLAN codes use the letters `A`-`Z` without `V`, least significant letter
//! first: `A`, `B`, ..., `Z`, `AA`, `BA`, ..., `ZA`, `AB`, ... There is no
//! upper bound on the index.

const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUWXYZ";

/// Code of the WLAN at position `index` (0-based)
///
/// # Examples
/// ```
/// use wlangen::wlan::wlan_code;
///
/// assert_eq!(wlan_code(0), "A");
/// assert_eq!(wlan_code(25), "AA");
/// assert_eq!(wlan_code(26), "BA");
/// ```
pub fn wlan_code(index: usize) -> String {
    let base = ALPHABET.len();
    let mut code = String::new();
    let mut n = index + 1;

    // Bijective base-25, digits emitted least significant first
    while n > 0 {
        let digit = (n - 1) % base;
        code.push(ALPHABET[digit] as char);
        n = (n - 1) / base;
    }

    code
}

/// Code of the AP of a WLAN
pub fn ap_code(wlan_code: &str) -> String {
    format!("AP_{}", wlan_code)
}

/// Code of the `n`-th (1-based) STA of a WLAN
pub fn sta_code(wlan_code: &str, n: usize) -> String {
    format!("STA_{}{}", wlan_code, n)
}
