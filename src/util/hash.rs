use std::fmt;
use std::str::FromStr;

use blake2::{Blake2b512, Blake2s256};
use sha1::Sha1;
use sha2::{Digest, Sha224, Sha256, Sha384, Sha512, Sha512_224, Sha512_256};
use sha3::{Sha3_224, Sha3_256, Sha3_384, Sha3_512};

use crate::error::{Error, Result};

/// Digest algorithms understood by [`generate_hash`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashAlgorithm {
    Md5,
    Sha1,
    Sha224,
    Sha256,
    Sha384,
    Sha512,
    Sha512_224,
    Sha512_256,
    Sha3_224,
    Sha3_256,
    Sha3_384,
    Sha3_512,
    /// BLAKE2b with its full 64-byte digest.
    Blake2b,
    /// BLAKE2s with its full 32-byte digest.
    Blake2s,
}

impl HashAlgorithm {
    pub const DEFAULT: HashAlgorithm = HashAlgorithm::Sha256;

    /// Hex digest of `data`.
    pub fn hex_digest(self, data: &[u8]) -> String {
        match self {
            HashAlgorithm::Md5 => format!("{:x}", md5::compute(data)),
            HashAlgorithm::Sha224 => hex::encode(Sha224::digest(data)),
            HashAlgorithm::Sha256 => hex::encode(Sha256::digest(data)),
            HashAlgorithm::Sha384 => hex::encode(Sha384::digest(data)),
            HashAlgorithm::Sha512 => hex::encode(Sha512::digest(data)),
            HashAlgorithm::Sha512_224 => hex::encode(Sha512_224::digest(data)),
            HashAlgorithm::Sha512_256 => hex::encode(Sha512_256::digest(data)),
            HashAlgorithm::Sha1 => hex::encode(Sha1::digest(data)),
            HashAlgorithm::Sha3_224 => hex::encode(Sha3_224::digest(data)),
            HashAlgorithm::Sha3_256 => hex::encode(Sha3_256::digest(data)),
            HashAlgorithm::Sha3_384 => hex::encode(Sha3_384::digest(data)),
            HashAlgorithm::Sha3_512 => hex::encode(Sha3_512::digest(data)),
            HashAlgorithm::Blake2b => hex::encode(Blake2b512::digest(data)),
            HashAlgorithm::Blake2s => hex::encode(Blake2s256::digest(data)),
        }
    }

    fn name(self) -> &'static str {
        match self {
            HashAlgorithm::Md5 => "md5",
            HashAlgorithm::Sha224 => "sha224",
            HashAlgorithm::Sha256 => "sha256",
            HashAlgorithm::Sha384 => "sha384",
            HashAlgorithm::Sha512 => "sha512",
            HashAlgorithm::Sha512_224 => "sha512_224",
            HashAlgorithm::Sha512_256 => "sha512_256",
            HashAlgorithm::Sha1 => "sha1",
            HashAlgorithm::Sha3_224 => "sha3_224",
            HashAlgorithm::Sha3_256 => "sha3_256",
            HashAlgorithm::Sha3_384 => "sha3_384",
            HashAlgorithm::Sha3_512 => "sha3_512",
            HashAlgorithm::Blake2b => "blake2b",
            HashAlgorithm::Blake2s => "blake2s",
        }
    }
}

impl Default for HashAlgorithm {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HashAlgorithm {
    type Err = Error;

    /// Case-insensitive; `-` and `_` are ignored, so `SHA-256` and
    /// `sha512_256` both parse.
    fn from_str(s: &str) -> Result<Self> {
        let normalized: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_ascii_lowercase();

        match normalized.as_str() {
            "md5" => Ok(HashAlgorithm::Md5),
            "sha224" => Ok(HashAlgorithm::Sha224),
            "sha256" => Ok(HashAlgorithm::Sha256),
            "sha384" => Ok(HashAlgorithm::Sha384),
            "sha512" => Ok(HashAlgorithm::Sha512),
            "sha512224" => Ok(HashAlgorithm::Sha512_224),
            "sha512256" => Ok(HashAlgorithm::Sha512_256),
            "sha1" => Ok(HashAlgorithm::Sha1),
            "sha3224" => Ok(HashAlgorithm::Sha3_224),
            "sha3256" => Ok(HashAlgorithm::Sha3_256),
            "sha3384" => Ok(HashAlgorithm::Sha3_384),
            "sha3512" => Ok(HashAlgorithm::Sha3_512),
            "blake2b" | "blake2b512" => Ok(HashAlgorithm::Blake2b),
            "blake2s" | "blake2s256" => Ok(HashAlgorithm::Blake2s),
            _ => Err(Error::UnsupportedAlgorithm(s.to_string())),
        }
    }
}

/// Hex digest of the UTF-8 bytes of `data` under the named algorithm.
pub fn generate_hash(data: &str, algorithm: &str) -> Result<String> {
    let algorithm: HashAlgorithm = algorithm.parse()?;
    Ok(algorithm.hex_digest(data.as_bytes()))
}

/// [`generate_hash`] with SHA-256.
pub fn generate_hash_default(data: &str) -> String {
    HashAlgorithm::DEFAULT.hex_digest(data.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sha256_of_abc_matches_published_vector() {
        assert_eq!(
            generate_hash("abc", "sha256").unwrap(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
        assert_eq!(generate_hash_default("abc"), generate_hash("abc", "sha256").unwrap());
    }

    #[test]
    fn other_algorithms_match_published_vectors() {
        assert_eq!(
            generate_hash("abc", "md5").unwrap(),
            "900150983cd24fb0d6963f7d28e17f72"
        );
        assert_eq!(
            generate_hash("abc", "sha224").unwrap(),
            "23097d223405d8228642a477bda255b32aadbce4bda0b3f7e36c9da7"
        );
        assert_eq!(
            generate_hash("abc", "sha512").unwrap(),
            "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a\
             2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f"
        );
    }

    #[test]
    fn remaining_sha2_variants_match_published_vectors() {
        assert_eq!(
            generate_hash("abc", "sha384").unwrap(),
            "cb00753f45a35e8bb5a03d699ac65007272c32ab0eded1631a8b605a43ff5bed\
             8086072ba1e7cc2358baeca134c825a7"
        );
        assert_eq!(
            generate_hash("abc", "sha512_224").unwrap(),
            "4634270f707b6a54daae7530460842e20e37ed265ceee9a43e8924aa"
        );
        assert_eq!(
            generate_hash("abc", "sha512_256").unwrap(),
            "53048e2681941ef99b2e29b76b4c7dabe4c2d0c634fc6d46e0e2f13107e7af23"
        );
    }

    #[test]
    fn sha1_sha3_and_blake2_match_published_vectors() {
        assert_eq!(
            generate_hash("abc", "sha1").unwrap(),
            "a9993e364706816aba3e25717850c26c9cd0d89d"
        );
        assert_eq!(
            generate_hash("abc", "sha3_256").unwrap(),
            "3a985da74fe225b2045c172d6bd390bd855f086e3e9d525b46bfe24511431532"
        );
        assert_eq!(
            generate_hash("abc", "sha3_512").unwrap(),
            "b751850b1a57168a5693cd924b6b096e08f621827444f70d884f5d0240d2712e\
             10e116e9192af3c91a7ec57647e3934057340b4cf408d5a56592f8274eec53f0"
        );
        assert_eq!(
            generate_hash("abc", "blake2b").unwrap(),
            "ba80a53f981c4d0d6a2797b69f12f6e94c212f14685ac4b74b12bb6fdbffa2d1\
             7d87c5392aab792dc252d5de4533cc9518d38aa8dbf1925ab92386edd4009923"
        );
        assert_eq!(
            generate_hash("abc", "blake2s").unwrap(),
            "508c5e8c327c14e2e1a72ba34eeb452f37458b209ed63a294d999b4c86675982"
        );
    }

    #[test]
    fn every_algorithm_name_parses_back() {
        for algorithm in [
            HashAlgorithm::Md5,
            HashAlgorithm::Sha1,
            HashAlgorithm::Sha224,
            HashAlgorithm::Sha256,
            HashAlgorithm::Sha384,
            HashAlgorithm::Sha512,
            HashAlgorithm::Sha512_224,
            HashAlgorithm::Sha512_256,
            HashAlgorithm::Sha3_224,
            HashAlgorithm::Sha3_256,
            HashAlgorithm::Sha3_384,
            HashAlgorithm::Sha3_512,
            HashAlgorithm::Blake2b,
            HashAlgorithm::Blake2s,
        ] {
            assert_eq!(algorithm.to_string().parse::<HashAlgorithm>().unwrap(), algorithm);
        }
    }

    #[test]
    fn algorithm_names_are_forgiving() {
        assert_eq!("SHA-256".parse::<HashAlgorithm>().unwrap(), HashAlgorithm::Sha256);
        assert_eq!("sha512_256".parse::<HashAlgorithm>().unwrap(), HashAlgorithm::Sha512_256);
        assert_eq!("MD5".parse::<HashAlgorithm>().unwrap(), HashAlgorithm::Md5);
        assert_eq!(HashAlgorithm::default(), HashAlgorithm::Sha256);
        assert_eq!(HashAlgorithm::Sha512_224.to_string(), "sha512_224");
    }

    #[test]
    fn unknown_algorithm_is_rejected() {
        let err = generate_hash("abc", "whirlpool").unwrap_err();
        assert!(matches!(err, Error::UnsupportedAlgorithm(name) if name == "whirlpool"));
    }

    #[test]
    fn digest_is_deterministic_and_utf8_based() {
        assert_eq!(
            generate_hash("héllo", "sha256").unwrap(),
            HashAlgorithm::Sha256.hex_digest("héllo".as_bytes())
        );
        assert_ne!(generate_hash_default("a"), generate_hash_default("b"));
    }
}
