//! Key file persistence
//!
//! Every integer is stored as its minimal big-endian byte string, so packing
//! and unpacking is lossless. Public and private halves live in separate
//! files; only the public one is meant to be shared.

use std::fs::{self, File, OpenOptions};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

use crate::codec::{bytes_to_int, int_to_bytes};
use crate::error::{KnapsackError, Result};
use crate::keys::{KeyPair, PrivateKey, PublicKey};

/// File name used for the public half inside a key directory
pub const PUBLIC_KEY_FILE: &str = "knapsack_public.pack";
/// File name used for the private half inside a key directory
pub const PRIVATE_KEY_FILE: &str = "knapsack_private.pack";

/// Smallest modulus that leaves room for a multiplier in `[2, M - 2]`
const MIN_MODULUS: u32 = 4;

/// Public key only, suitable for sharing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicKeyFile {
    pub pub_key: Vec<Vec<u8>>,
}

/// Private constants needed to decrypt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrivateKeyFile {
    /// Superincreasing sequence
    pub priv_key: Vec<Vec<u8>>,
    /// Modulus
    pub m: Vec<u8>,
    /// Multiplier
    pub w: Vec<u8>,
    /// Inverse of the multiplier
    pub wi: Vec<u8>,
}

impl From<&PublicKey> for PublicKeyFile {
    fn from(key: &PublicKey) -> Self {
        Self {
            pub_key: encode_seq(key.elements()),
        }
    }
}

impl From<&PrivateKey> for PrivateKeyFile {
    fn from(key: &PrivateKey) -> Self {
        Self {
            priv_key: encode_seq(key.sequence()),
            m: int_to_bytes(key.modulus()),
            w: int_to_bytes(key.multiplier()),
            wi: int_to_bytes(key.multiplier_inverse()),
        }
    }
}

/// Serialize a key pair into (public file bytes, private file bytes)
pub fn pack(pair: &KeyPair) -> Result<(Vec<u8>, Vec<u8>)> {
    let public = bincode::serialize(&PublicKeyFile::from(pair.public_key()))?;
    let private = bincode::serialize(&PrivateKeyFile::from(pair.private_key()))?;
    Ok((public, private))
}

/// Rebuild a key pair from both key files
pub fn unpack(public: &PublicKeyFile, private: &PrivateKeyFile) -> Result<KeyPair> {
    Ok(KeyPair::from_parts(unpack_public(public), unpack_private(private)?))
}

/// Public key from a public key file
pub fn unpack_public(file: &PublicKeyFile) -> PublicKey {
    PublicKey::new(decode_seq(&file.pub_key))
}

/// Private key from a private key file
///
/// Rejects a modulus below 4, which no generated key can have and which
/// would make decryption divide by zero.
pub fn unpack_private(file: &PrivateKeyFile) -> Result<PrivateKey> {
    let modulus = bytes_to_int(&file.m);
    if modulus < BigUint::from(MIN_MODULUS) {
        return Err(KnapsackError::Serialization(format!(
            "private key modulus {} is below {}",
            modulus, MIN_MODULUS
        )));
    }

    Ok(PrivateKey::new(
        decode_seq(&file.priv_key),
        modulus,
        bytes_to_int(&file.w),
        bytes_to_int(&file.wi),
    ))
}

/// Decode a packed public key file
pub fn read_public(bytes: &[u8]) -> Result<PublicKey> {
    let file: PublicKeyFile = bincode::deserialize(bytes)?;
    Ok(unpack_public(&file))
}

/// Decode a packed private key file
pub fn read_private(bytes: &[u8]) -> Result<PrivateKey> {
    let file: PrivateKeyFile = bincode::deserialize(bytes)?;
    unpack_private(&file)
}

/// Write both halves of a key pair into `dir`
///
/// Returns the (public, private) file paths.
pub fn save_key_pair(pair: &KeyPair, dir: &Path) -> Result<(PathBuf, PathBuf)> {
    fs::create_dir_all(dir)?;
    let (public, private) = pack(pair)?;

    let public_path = dir.join(PUBLIC_KEY_FILE);
    let private_path = dir.join(PRIVATE_KEY_FILE);
    write_restricted(&public_path, &public)?;
    write_restricted(&private_path, &private)?;

    Ok((public_path, private_path))
}

/// Load a public key from a packed key file
pub fn load_public_key(path: &Path) -> Result<PublicKey> {
    read_public(&fs::read(path)?)
}

/// Load a private key from a packed key file
pub fn load_private_key(path: &Path) -> Result<PrivateKey> {
    read_private(&fs::read(path)?)
}

/// Load a full key pair from a directory written by [`save_key_pair`]
pub fn load_key_pair(dir: &Path) -> Result<KeyPair> {
    let public = load_public_key(&dir.join(PUBLIC_KEY_FILE))?;
    let private = load_private_key(&dir.join(PRIVATE_KEY_FILE))?;
    Ok(KeyPair::from_parts(public, private))
}

/// Human-readable JSON export of the public key file
pub fn export_public_json(key: &PublicKey, path: &Path) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, &PublicKeyFile::from(key))?;
    writer.flush()?;
    Ok(())
}

/// Read a public key back from its JSON export
pub fn import_public_json(path: &Path) -> Result<PublicKey> {
    let reader = BufReader::new(File::open(path)?);
    let file: PublicKeyFile = serde_json::from_reader(reader)?;
    Ok(unpack_public(&file))
}

fn write_restricted(path: &Path, bytes: &[u8]) -> Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    let mut writer = BufWriter::new(options.open(path)?);
    writer.write_all(bytes)?;
    writer.flush()?;
    Ok(())
}

fn encode_seq(seq: &[BigUint]) -> Vec<Vec<u8>> {
    seq.iter().map(int_to_bytes).collect()
}

fn decode_seq(seq: &[Vec<u8>]) -> Vec<BigUint> {
    seq.iter().map(|bytes| bytes_to_int(bytes)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cipher::decrypt_bytes;
    use crate::math::KeySampler;
    use crate::params::KnapsackParams;
    use tempfile::tempdir;

    fn sample_pair() -> KeyPair {
        let mut sampler = KeySampler::with_seed(100);
        KeyPair::generate(&KnapsackParams::with_key_length(100), &mut sampler).unwrap()
    }

    #[test]
    fn test_pack_unpack() {
        let pair = sample_pair();
        let (public, private) = pack(&pair).unwrap();

        let public_file: PublicKeyFile = bincode::deserialize(&public).unwrap();
        let private_file: PrivateKeyFile = bincode::deserialize(&private).unwrap();
        let unpacked = unpack(&public_file, &private_file).unwrap();

        assert_eq!(unpacked, pair);
        assert!(unpacked.is_consistent());
    }

    #[test]
    fn test_encodings_are_minimal() {
        let pair = sample_pair();
        let file = PrivateKeyFile::from(pair.private_key());
        for bytes in file.priv_key.iter().chain([&file.m, &file.w, &file.wi]) {
            assert!(!bytes.is_empty());
            assert_ne!(bytes[0], 0, "leading zero byte in {:?}", bytes);
        }
    }

    #[test]
    fn test_save_and_load_dir() {
        let dir = tempdir().unwrap();
        let pair = sample_pair();

        let (public_path, private_path) = save_key_pair(&pair, dir.path()).unwrap();
        assert_eq!(public_path.file_name().unwrap(), PUBLIC_KEY_FILE);
        assert_eq!(private_path.file_name().unwrap(), PRIVATE_KEY_FILE);

        let loaded = load_key_pair(dir.path()).unwrap();
        assert_eq!(loaded, pair);

        let public = load_public_key(&public_path).unwrap();
        assert_eq!(public.id(), pair.public_key().id());
    }

    #[cfg(unix)]
    #[test]
    fn test_private_file_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let (_, private_path) = save_key_pair(&sample_pair(), dir.path()).unwrap();
        let mode = fs::metadata(private_path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[test]
    fn test_json_export_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("public.json");
        let pair = sample_pair();

        export_public_json(pair.public_key(), &path).unwrap();
        let imported = import_public_json(&path).unwrap();
        assert_eq!(&imported, pair.public_key());
    }

    #[test]
    fn test_corrupt_file_rejected() {
        let result = read_private(&[0xff, 0x01]);
        assert!(matches!(result, Err(KnapsackError::Serialization(_))));
    }

    #[test]
    fn test_zero_modulus_rejected() {
        let file = PrivateKeyFile {
            priv_key: vec![vec![1], vec![3]],
            m: vec![],
            w: vec![],
            wi: vec![],
        };
        let bytes = bincode::serialize(&file).unwrap();

        assert!(matches!(read_private(&bytes), Err(KnapsackError::Serialization(_))));
        assert!(matches!(unpack_private(&file), Err(KnapsackError::Serialization(_))));

        let dir = tempdir().unwrap();
        let path = dir.path().join(PRIVATE_KEY_FILE);
        fs::write(&path, &bytes).unwrap();
        assert!(matches!(load_private_key(&path), Err(KnapsackError::Serialization(_))));
    }

    #[test]
    fn test_smallest_modulus_loads() {
        let file = PrivateKeyFile {
            priv_key: vec![vec![1]],
            m: vec![4],
            w: vec![3],
            wi: vec![3],
        };
        let sk = unpack_private(&file).unwrap();
        assert_eq!(sk.modulus(), &BigUint::from(4u32));
        // Decrypting with it must not panic
        assert!(decrypt_bytes(&sk, &[1]).is_empty());
    }
}
