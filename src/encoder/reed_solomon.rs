/// Reed-Solomon error correction for QR codes
/// QR codes use RS over GF(256) with primitive polynomial x^8 + x^4 + x^3 + x^2 + 1
use super::gf256::Gf256;

/// Systematic RS encoder for a fixed number of ECC codewords
///
/// The generator is g(x) = (x - a^0)(x - a^1)...(x - a^(n-1)), stored highest
/// degree first with the implicit leading 1 dropped.
#[derive(Debug, Clone)]
pub struct ReedSolomonEncoder {
    generator: Vec<u8>,
}

impl ReedSolomonEncoder {
    /// Build the generator for `degree` ECC codewords (1..=255)
    pub fn new(degree: usize) -> Self {
        assert!(
            (1..=255).contains(&degree),
            "Reed-Solomon degree {degree} out of range"
        );
        let mut generator = vec![0u8; degree];
        generator[degree - 1] = 1;

        // Multiply by (x - a^i) for each root
        let mut root = 1u8;
        for _ in 0..degree {
            for j in 0..degree {
                generator[j] = Gf256::mul(generator[j], root);
                if j + 1 < degree {
                    generator[j] ^= generator[j + 1];
                }
            }
            root = Gf256::mul(root, 0x02);
        }

        Self { generator }
    }

    /// Number of ECC codewords produced
    pub fn degree(&self) -> usize {
        self.generator.len()
    }

    /// Generator coefficients, highest degree first, without the leading 1
    pub fn generator(&self) -> &[u8] {
        &self.generator
    }

    /// ECC codewords: data(x) * x^n mod g(x)
    pub fn encode(&self, data: &[u8]) -> Vec<u8> {
        let mut remainder = vec![0u8; self.generator.len()];
        for &byte in data {
            let factor = byte ^ remainder[0];
            remainder.rotate_left(1);
            if let Some(last) = remainder.last_mut() {
                *last = 0;
            }
            for (r, &g) in remainder.iter_mut().zip(&self.generator) {
                *r ^= Gf256::mul(g, factor);
            }
        }
        remainder
    }
}
