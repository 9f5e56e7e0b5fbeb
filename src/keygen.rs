//! Random secret keys encoded as text.
//!
//! The codec itself never sources randomness; this module draws bytes from a
//! caller-supplied [`RngCore`] and encodes them, and renders the result into
//! the `define()` lines WordPress expects in `wp-config.php`.

use rand::RngCore;

use crate::codec::Codec;

/// Key strength used when none is requested.
pub const DEFAULT_BITS: u32 = 320;

/// Secret constants defined in `wp-config.php`.
pub const WP_KEY_NAMES: [&str; 8] = [
    "AUTH_KEY",
    "SECURE_AUTH_KEY",
    "LOGGED_IN_KEY",
    "NONCE_KEY",
    "AUTH_SALT",
    "SECURE_AUTH_SALT",
    "LOGGED_IN_SALT",
    "NONCE_SALT",
];

/// Width of the quoted-name column: two quotes, a comma and a space around
/// the longest name.
const WP_NAME_WIDTH: usize = max_name_len(&WP_KEY_NAMES) + 4;

const fn max_name_len(names: &[&str]) -> usize {
    let mut max = 0;
    let mut i = 0;
    while i < names.len() {
        if names[i].len() > max {
            max = names[i].len();
        }
        i += 1;
    }
    max
}

/// Output layout for generated keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum KeyFormat {
    /// One bare key per line
    Plain,
    /// `define('NAME', 'key');` lines for every WordPress secret
    #[default]
    WordPress,
}

/// Number of whole bytes needed to hold at least `bits` bits.
pub fn bits_to_bytes(bits: u32) -> usize {
    bits.div_ceil(8) as usize
}

/// Draws `bytes` random bytes from `rng` and encodes them with `codec`.
pub fn generate_key<R>(codec: &Codec, bytes: usize, rng: &mut R) -> String
where
    R: RngCore + ?Sized,
{
    let mut secret = vec![0u8; bytes];
    rng.fill_bytes(&mut secret);
    codec.encode(&secret)
}

/// Renders one `wp-config.php` secret definition.
///
/// The quoted name and its trailing comma are left-justified so that the
/// secrets of consecutive lines line up.
pub fn wp_config_line(name: &str, secret: &str) -> String {
    let quoted = format!("'{}',", name);
    format!("define({:<width$}'{}');", quoted, secret, width = WP_NAME_WIDTH)
}

/// Generates keys of at least `bits` bits and renders them in `format`.
///
/// `Plain` produces `count` lines; `WordPress` produces one line per
/// [`WP_KEY_NAMES`] entry and ignores `count`.
pub fn render_keys<R>(
    codec: &Codec,
    bits: u32,
    count: usize,
    format: KeyFormat,
    rng: &mut R,
) -> Vec<String>
where
    R: RngCore + ?Sized,
{
    let bytes = bits_to_bytes(bits);
    log::debug!("generating {}-byte keys with a base-{} codec", bytes, codec.radix());

    match format {
        KeyFormat::Plain => (0..count)
            .map(|_| generate_key(codec, bytes, rng))
            .collect(),
        KeyFormat::WordPress => WP_KEY_NAMES
            .iter()
            .map(|name| wp_config_line(name, &generate_key(codec, bytes, rng)))
            .collect(),
    }
}
