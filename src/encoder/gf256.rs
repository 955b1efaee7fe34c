/// GF(2^8) arithmetic for Reed-Solomon codewords
///
/// Field polynomial x^8 + x^4 + x^3 + x^2 + 1 (0x11D), generator alpha = 2.
/// Addition is XOR; multiplication goes through log/antilog tables built at
/// compile time.
pub struct Gf256;

const PRIMITIVE: u16 = 0x11D;

static EXP_TABLE: [u8; 256] = build_exp_table();
static LOG_TABLE: [u8; 256] = build_log_table();

const fn build_exp_table() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut x: u16 = 1;
    let mut i = 0;
    while i < 255 {
        table[i] = x as u8;
        x <<= 1;
        if x & 0x100 != 0 {
            x ^= PRIMITIVE;
        }
        i += 1;
    }
    // alpha^255 == alpha^0
    table[255] = 1;
    table
}

const fn build_log_table() -> [u8; 256] {
    let exp = build_exp_table();
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < 255 {
        table[exp[i] as usize] = i as u8;
        i += 1;
    }
    table
}

impl Gf256 {
    /// a + b (and a - b)
    pub fn add(a: u8, b: u8) -> u8 {
        a ^ b
    }

    /// a * b
    pub fn mul(a: u8, b: u8) -> u8 {
        if a == 0 || b == 0 {
            return 0;
        }
        let log_a = LOG_TABLE[a as usize] as usize;
        let log_b = LOG_TABLE[b as usize] as usize;
        EXP_TABLE[(log_a + log_b) % 255]
    }

    /// a / b; panics when b is zero
    pub fn div(a: u8, b: u8) -> u8 {
        assert!(b != 0, "division by zero in GF(256)");
        if a == 0 {
            return 0;
        }
        let log_a = LOG_TABLE[a as usize] as usize;
        let log_b = LOG_TABLE[b as usize] as usize;
        EXP_TABLE[(log_a + 255 - log_b) % 255]
    }

    /// Multiplicative inverse; panics for zero
    pub fn inv(a: u8) -> u8 {
        Self::div(1, a)
    }

    /// alpha^n
    pub fn exp(n: usize) -> u8 {
        EXP_TABLE[n % 255]
    }

    /// log_alpha(a); undefined (returns 0) for zero
    pub fn log(a: u8) -> u8 {
        LOG_TABLE[a as usize]
    }

    /// a^n (0^0 == 1)
    pub fn pow(a: u8, n: usize) -> u8 {
        if a == 0 {
            return if n == 0 { 1 } else { 0 };
        }
        let log_a = LOG_TABLE[a as usize] as usize;
        EXP_TABLE[(log_a * (n % 255)) % 255]
    }
}
