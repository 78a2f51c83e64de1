//! Artifact archive building
//!
//! Packs a project's artifacts into a gzip-compressed tar archive for the
//! export endpoint. Building happens in memory; artifact sets are small
//! (text documents, not binaries).

use cda_domain::error::{Error, Result};
use flate2::Compression;
use flate2::write::GzEncoder;

/// Build a tar.gz archive from `(filename, bytes)` entries
pub fn build_archive(entries: &[(String, Vec<u8>)]) -> Result<Vec<u8>> {
    let encoder = GzEncoder::new(Vec::new(), Compression::default());
    let mut builder = tar::Builder::new(encoder);

    for (name, bytes) in entries {
        let mut header = tar::Header::new_gnu();
        header.set_size(bytes.len() as u64);
        header.set_mode(0o644);
        header.set_cksum();
        builder
            .append_data(&mut header, name, bytes.as_slice())
            .map_err(|e| Error::storage_with_source("failed to append archive entry", e))?;
    }

    let encoder = builder
        .into_inner()
        .map_err(|e| Error::storage_with_source("failed to finalize archive", e))?;
    encoder
        .finish()
        .map_err(|e| Error::storage_with_source("failed to compress archive", e))
}
