use super::{GenotypeId, GpTable, PhenotypeId};
use crate::codec::BinaryCodec;
use crate::consts::{CSV_HEADER_GENOTYPE, CSV_HEADER_PHENOTYPE, MAX_GENOTYPE_BITS};
use crate::error::{GpError, GpResult};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use tracing::{debug, warn};

/// Writes `GTYPE,PTYPE_ID` rows in ascending genotype order,
/// independent of how the buckets are ordered internally.
pub fn write_table<W: Write>(table: &GpTable, writer: W) -> GpResult<()> {
    let codec = BinaryCodec::new(table.genotype_bits());
    let phenotypes = table.phenotype_map();

    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record([CSV_HEADER_GENOTYPE, CSV_HEADER_PHENOTYPE])?;

    for (id, pid) in phenotypes.iter().enumerate() {
        let gtype = codec.encode(id as GenotypeId)?;
        wtr.write_record([gtype, pid.to_string()])?;
    }

    wtr.flush()?;
    Ok(())
}

pub fn save_table<P: AsRef<Path>>(table: &GpTable, path: P) -> GpResult<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    write_table(table, file)?;
    debug!("Wrote {} genotypes to {:?}", table.genotype_count(), path);
    Ok(())
}

/// Parses a `gptable.csv` back into a table.
///
/// The genotype width is taken from the first row. Without an explicit
/// `phenotypes` count the largest index seen defines it.
pub fn read_table<R: Read>(reader: R, phenotypes: Option<usize>) -> GpResult<GpTable> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    if headers.len() != 2
        || &headers[0] != CSV_HEADER_GENOTYPE
        || &headers[1] != CSV_HEADER_PHENOTYPE
    {
        return Err(GpError::Validation(format!(
            "Expected header '{},{}', found '{}'",
            CSV_HEADER_GENOTYPE,
            CSV_HEADER_PHENOTYPE,
            headers.iter().collect::<Vec<_>>().join(",")
        )));
    }

    let mut codec: Option<BinaryCodec> = None;
    let mut rows: Vec<(GenotypeId, PhenotypeId)> = Vec::new();

    for (row_idx, result) in rdr.records().enumerate() {
        let rec = result?;
        if rec.len() != 2 {
            return Err(GpError::Validation(format!(
                "[Row {}] expected 2 columns, found {}",
                row_idx + 1,
                rec.len()
            )));
        }

        let codec = match codec {
            Some(c) => c,
            None => {
                let width = rec[0].len();
                if width == 0 || width > MAX_GENOTYPE_BITS as usize {
                    return Err(GpError::Validation(format!(
                        "[Row {}] genotype width {} outside 1..={}",
                        row_idx + 1,
                        width,
                        MAX_GENOTYPE_BITS
                    )));
                }
                *codec.insert(BinaryCodec::new(width as u32))
            }
        };
        let gid = codec.decode(&rec[0])?;
        let pid: PhenotypeId = rec[1].parse().map_err(|_| {
            GpError::Parse(format!(
                "[Row {}] invalid phenotype index '{}'",
                row_idx + 1,
                &rec[1]
            ))
        })?;
        rows.push((gid, pid));
    }

    let codec = codec.ok_or_else(|| GpError::Validation("Table file has no rows".into()))?;

    if rows.windows(2).any(|w| w[0].0 >= w[1].0) {
        warn!("Table rows are not in ascending genotype order");
    }

    let max_pid = rows.iter().map(|&(_, pid)| pid).max().unwrap_or(0);
    let count = phenotypes.unwrap_or(max_pid + 1);
    if max_pid >= count {
        return Err(GpError::Validation(format!(
            "Phenotype index {} exceeds phenotype count {}",
            max_pid, count
        )));
    }

    let mut buckets = vec![Vec::new(); count];
    for (gid, pid) in rows {
        buckets[pid].push(gid);
    }

    GpTable::from_buckets(codec.bits(), buckets)
}

pub fn load_table<P: AsRef<Path>>(path: P, phenotypes: Option<usize>) -> GpResult<GpTable> {
    let file = File::open(path.as_ref())?;
    read_table(file, phenotypes)
}
