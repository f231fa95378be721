use crate::error::{GpError, GpResult};
use crate::table::GenotypeId;

/// Fixed-width binary form of genotype identifiers, most significant bit first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BinaryCodec {
    bits: u32,
}

impl BinaryCodec {
    pub fn new(bits: u32) -> Self {
        Self { bits }
    }

    pub fn bits(&self) -> u32 {
        self.bits
    }

    /// Size of the identifier space, `2^bits`.
    pub fn genotype_count(&self) -> usize {
        1usize << self.bits
    }

    #[inline]
    pub fn contains(&self, id: GenotypeId) -> bool {
        (id as usize) < self.genotype_count()
    }

    pub fn encode(&self, id: GenotypeId) -> GpResult<String> {
        if !self.contains(id) {
            return Err(GpError::OutOfRange {
                id,
                bits: self.bits,
            });
        }
        Ok(format!("{:0width$b}", id, width = self.bits as usize))
    }

    pub fn decode(&self, s: &str) -> GpResult<GenotypeId> {
        if s.len() != self.bits as usize {
            return Err(GpError::Parse(format!(
                "Genotype '{}' has width {}, expected {}",
                s,
                s.len(),
                self.bits
            )));
        }

        let mut id: GenotypeId = 0;
        for c in s.chars() {
            id <<= 1;
            match c {
                '0' => {}
                '1' => id |= 1,
                other => {
                    return Err(GpError::Parse(format!(
                        "Invalid symbol '{}' in genotype '{}'",
                        other, s
                    )))
                }
            }
        }
        Ok(id)
    }

    /// Encodes every identifier in ascending order.
    pub fn encode_all(&self) -> Vec<String> {
        (0..self.genotype_count())
            .map(|id| format!("{:0width$b}", id, width = self.bits as usize))
            .collect()
    }
}
