//! Discovery and persistent caching of monic irreducible polynomials over GF(p).
//!
//! For a prime `p` the cache builds, one degree at a time, the complete list
//! of monic irreducible polynomials of each degree. A degree-`k` candidate is
//! kept when no lower-degree irreducible up to the configured [`SieveBound`]
//! divides it. Every finished degree is appended to a [`RecordStore`] so a
//! later run can load it instead of sieving again.
//!
//! # Example
//!
//! ```
//! use gfext::{CacheConfig, IrreduciblePolynomialCache};
//!
//! let cache = IrreduciblePolynomialCache::new(CacheConfig::in_memory());
//!
//! // x^2 + x + 1 is the only irreducible quadratic over GF(2)
//! let quadratics = cache.irreducibles(2, 2).unwrap();
//! assert_eq!(quadratics.len(), 1);
//! assert_eq!(quadratics[0].to_values(), vec![1, 1, 1]);
//! ```

use std::collections::HashMap;
use std::fs::{self, OpenOptions};
use std::io::{BufRead, BufReader, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use log::{debug, info, warn};
use parking_lot::{Mutex, RwLock};

use crate::error::{FieldError, Result};
use crate::structures::fp::{Fp, PrimeField};
use crate::structures::poly::Poly;
use crate::utils::{checked_pow, floor_sqrt};

/// Directory used by [`CacheConfig::default`].
pub const DEFAULT_DIRECTORY: &str = "irreducible_polys";

/* ---- configuration ---- */

/// Largest degree of lower irreducibles tried as divisors of a candidate.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SieveBound {
    /// `degree / 2`. Every reducible polynomial has an irreducible factor of
    /// at most half its degree, so the sieve is exact.
    #[default]
    HalfDegree,
    /// `floor(sqrt(degree))`. Matches older caches; from degree 6 on it lets
    /// through products of irreducibles whose degrees all exceed the root.
    SquareRoot,
}

impl SieveBound {
    /// Cutoff degree for candidates of the given degree.
    pub const fn cutoff(self, degree: usize) -> usize {
        match self {
            SieveBound::HalfDegree => degree / 2,
            SieveBound::SquareRoot => floor_sqrt(degree),
        }
    }
}

/// Where finished degree levels are persisted.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StoreLocation {
    /// One `irred_polys_<p>.txt` file per prime under this directory.
    Directory(PathBuf),
    /// Nothing outlives the cache.
    Memory,
}

/// Settings for an [`IrreduciblePolynomialCache`].
///
/// ```
/// use gfext::{CacheConfig, SieveBound, StoreLocation};
///
/// let config = CacheConfig::default()
///     .with_directory("/var/cache/gfext")
///     .with_sieve_bound(SieveBound::SquareRoot);
///
/// assert_eq!(config.store, StoreLocation::Directory("/var/cache/gfext".into()));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CacheConfig {
    pub store: StoreLocation,
    pub sieve_bound: SieveBound,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            store: StoreLocation::Directory(PathBuf::from(DEFAULT_DIRECTORY)),
            sieve_bound: SieveBound::default(),
        }
    }
}

impl CacheConfig {
    /// Default settings without persistence.
    pub fn in_memory() -> Self {
        Self {
            store: StoreLocation::Memory,
            ..Self::default()
        }
    }

    pub fn with_directory(mut self, dir: impl Into<PathBuf>) -> Self {
        self.store = StoreLocation::Directory(dir.into());
        self
    }

    pub fn with_sieve_bound(mut self, bound: SieveBound) -> Self {
        self.sieve_bound = bound;
        self
    }
}

/* ---- records ---- */

/// All monic irreducible polynomials of one degree over GF(prime).
///
/// Polynomials are kept as residue lists, low to high degree, including the
/// leading 1.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IrreducibilityRecord {
    pub prime: u64,
    pub degree: usize,
    pub polynomials: Vec<Vec<u64>>,
}

impl IrreducibilityRecord {
    pub fn from_polys(prime: u64, degree: usize, polys: &[Poly<Fp>]) -> Self {
        Self {
            prime,
            degree,
            polynomials: polys.iter().map(Poly::to_values).collect(),
        }
    }

    pub fn to_polys(&self, field: PrimeField) -> Vec<Poly<Fp>> {
        self.polynomials
            .iter()
            .map(|values| Poly::new(values.iter().map(|&v| field.elem_u64(v)).collect()))
            .collect()
    }

    /// Serialize as `<degree>:<c,c,..>;<c,c,..>`, without a newline.
    pub fn to_line(&self) -> String {
        let polys: Vec<String> = self
            .polynomials
            .iter()
            .map(|p| {
                p.iter()
                    .map(u64::to_string)
                    .collect::<Vec<_>>()
                    .join(",")
            })
            .collect();
        format!("{}:{}", self.degree, polys.join(";"))
    }

    /// Parse one stored line. The error is a human-readable reason.
    pub fn parse_line(prime: u64, line: &str) -> core::result::Result<Self, String> {
        let (degree, body) = line
            .trim_end()
            .split_once(':')
            .ok_or_else(|| "missing ':'".to_string())?;
        let degree: usize = degree
            .trim()
            .parse()
            .map_err(|_| format!("bad degree {degree:?}"))?;
        if degree == 0 {
            return Err("degree 0".to_string());
        }
        if body.is_empty() {
            return Err("no polynomials".to_string());
        }

        let mut polynomials = Vec::new();
        for poly in body.split(';') {
            let values = poly
                .split(',')
                .map(|c| {
                    let v: u64 = c
                        .trim()
                        .parse()
                        .map_err(|_| format!("bad coefficient {c:?}"))?;
                    if v >= prime {
                        return Err(format!("coefficient {v} out of range for p={prime}"));
                    }
                    Ok(v)
                })
                .collect::<core::result::Result<Vec<u64>, String>>()?;

            if values.len() != degree + 1 {
                return Err(format!(
                    "polynomial {poly:?} has {} coefficients, expected {}",
                    values.len(),
                    degree + 1
                ));
            }
            if values.last() != Some(&1) {
                return Err(format!("polynomial {poly:?} is not monic"));
            }
            polynomials.push(values);
        }

        Ok(Self {
            prime,
            degree,
            polynomials,
        })
    }
}

/* ---- stores ---- */

/// Append-only persistence for finished degree levels.
///
/// Per prime, records are held in increasing degree order.
pub trait RecordStore: Send + Sync {
    /// Record for `(prime, degree)`, scanning in order and stopping at the
    /// first record whose degree reaches `degree`.
    fn load(&self, prime: u64, degree: usize) -> Result<Option<IrreducibilityRecord>>;

    /// Degree of the last record held for `prime`.
    fn last_degree(&self, prime: u64) -> Result<Option<usize>>;

    /// Unconditionally store `record` after the existing ones.
    fn write_record(&self, record: &IrreducibilityRecord) -> Result<()>;

    /// Store `record` if its degree exceeds the last stored degree.
    ///
    /// Returns `Ok(false)` without writing otherwise.
    fn append(&self, record: &IrreducibilityRecord) -> Result<bool> {
        if let Some(last) = self.last_degree(record.prime)? {
            if record.degree <= last {
                warn!(
                    "refusing to append degree {} for p={}: store already ends at degree {}",
                    record.degree, record.prime, last
                );
                return Ok(false);
            }
        }
        self.write_record(record)?;
        info!(
            "stored {} irreducible polynomials of degree {} over GF({})",
            record.polynomials.len(),
            record.degree,
            record.prime
        );
        Ok(true)
    }
}

/// Line-per-degree text files, one per prime.
#[derive(Clone, Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Store under `dir`; the directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn directory(&self) -> &Path {
        &self.dir
    }

    /// `<dir>/irred_polys_<prime>.txt`
    pub fn path_for(&self, prime: u64) -> PathBuf {
        self.dir.join(format!("irred_polys_{prime}.txt"))
    }

    /// Parsed records in file order; `None` if the file does not exist.
    ///
    /// Stops after the first record satisfying `stop`.
    fn scan(
        &self,
        prime: u64,
        mut stop: impl FnMut(&IrreducibilityRecord) -> bool,
    ) -> Result<Option<Vec<IrreducibilityRecord>>> {
        let path = self.path_for(prime);
        let file = match fs::File::open(&path) {
            Ok(f) => f,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let mut records = Vec::new();
        for (idx, line) in BufReader::new(file).lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let record = IrreducibilityRecord::parse_line(prime, &line).map_err(|reason| {
                FieldError::CorruptRecord {
                    path: path.clone(),
                    line: idx + 1,
                    reason,
                }
            })?;
            let done = stop(&record);
            records.push(record);
            if done {
                break;
            }
        }
        Ok(Some(records))
    }
}

impl RecordStore for FileStore {
    fn load(&self, prime: u64, degree: usize) -> Result<Option<IrreducibilityRecord>> {
        let records = self.scan(prime, |r| r.degree >= degree)?;
        Ok(records
            .and_then(|mut r| r.pop())
            .filter(|r| r.degree == degree))
    }

    fn last_degree(&self, prime: u64) -> Result<Option<usize>> {
        let records = self.scan(prime, |_| false)?;
        Ok(records.and_then(|r| r.last().map(|r| r.degree)))
    }

    fn write_record(&self, record: &IrreducibilityRecord) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        let mut file = OpenOptions::new()
            .read(true)
            .create(true)
            .append(true)
            .open(self.path_for(record.prime))?;

        // A hand-edited or truncated file may end mid-line.
        if file.metadata()?.len() > 0 {
            let mut last = [0u8; 1];
            file.seek(SeekFrom::End(-1))?;
            file.read_exact(&mut last)?;
            if last[0] != b'\n' {
                writeln!(file)?;
            }
        }
        writeln!(file, "{}", record.to_line())?;
        Ok(())
    }
}

/// Store that keeps records only for the lifetime of the value.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Mutex<HashMap<u64, Vec<IrreducibilityRecord>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records held for `prime`.
    pub fn len(&self, prime: u64) -> usize {
        self.records.lock().get(&prime).map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().values().all(Vec::is_empty)
    }
}

impl RecordStore for MemoryStore {
    fn load(&self, prime: u64, degree: usize) -> Result<Option<IrreducibilityRecord>> {
        let records = self.records.lock();
        Ok(records
            .get(&prime)
            .and_then(|r| r.iter().find(|r| r.degree >= degree))
            .filter(|r| r.degree == degree)
            .cloned())
    }

    fn last_degree(&self, prime: u64) -> Result<Option<usize>> {
        let records = self.records.lock();
        Ok(records
            .get(&prime)
            .and_then(|r| r.last())
            .map(|r| r.degree))
    }

    fn write_record(&self, record: &IrreducibilityRecord) -> Result<()> {
        self.records
            .lock()
            .entry(record.prime)
            .or_default()
            .push(record.clone());
        Ok(())
    }
}

/* ---- candidate generation ---- */

/// Every monic polynomial of a fixed degree over GF(p).
///
/// The `p^degree` lower-coefficient tuples are enumerated like an odometer
/// whose most significant digit is the constant term: the coefficient of
/// `x^(degree-1)` changes fastest.
///
/// ```
/// use gfext::{MonicPolynomials, PrimeField};
///
/// let f2 = PrimeField::new(2).unwrap();
/// let all: Vec<Vec<u64>> = MonicPolynomials::new(f2, 2)
///     .unwrap()
///     .map(|p| p.to_values())
///     .collect();
///
/// assert_eq!(all, vec![vec![0, 0, 1], vec![0, 1, 1], vec![1, 0, 1], vec![1, 1, 1]]);
/// ```
#[derive(Clone, Debug)]
pub struct MonicPolynomials {
    field: PrimeField,
    digits: Vec<u64>,
    remaining: usize,
}

impl MonicPolynomials {
    /// # Errors
    ///
    /// Returns `FieldError::InvalidArgument` if `p^degree` does not fit in
    /// `usize`.
    pub fn new(field: PrimeField, degree: usize) -> Result<Self> {
        let count = checked_pow(field.characteristic(), degree)
            .and_then(|n| usize::try_from(n).ok())
            .ok_or_else(|| {
                FieldError::InvalidArgument(format!(
                    "{}^{} monic polynomials cannot be enumerated",
                    field.characteristic(),
                    degree
                ))
            })?;

        Ok(Self {
            field,
            digits: vec![0; degree],
            remaining: count,
        })
    }

    fn advance(&mut self) {
        let p = self.field.characteristic();
        for digit in self.digits.iter_mut().rev() {
            *digit += 1;
            if *digit < p {
                return;
            }
            *digit = 0;
        }
    }
}

impl Iterator for MonicPolynomials {
    type Item = Poly<Fp>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let mut coeffs: Vec<Fp> = self
            .digits
            .iter()
            .map(|&d| self.field.elem_u64(d))
            .collect();
        coeffs.push(self.field.one());
        self.advance();

        Some(Poly::new(coeffs))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for MonicPolynomials {}

/* ---- cache ---- */

/// Memoized degree levels for one prime.
#[derive(Default)]
struct PrimeTable {
    /// `levels[k - 1]` holds the irreducibles of degree `k`.
    levels: RwLock<Vec<Vec<Poly<Fp>>>>,
    /// Serializes sieving and appends for this prime.
    compute: Mutex<()>,
}

/// Thread-safe, persistent cache of irreducible polynomials.
///
/// Results are memoized per prime for the life of the cache, and every
/// newly sieved degree is appended to the configured store. Different primes
/// are computed independently.
pub struct IrreduciblePolynomialCache {
    config: CacheConfig,
    store: Arc<dyn RecordStore>,
    tables: RwLock<HashMap<u64, Arc<PrimeTable>>>,
}

impl Default for IrreduciblePolynomialCache {
    fn default() -> Self {
        Self::new(CacheConfig::default())
    }
}

impl core::fmt::Debug for IrreduciblePolynomialCache {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("IrreduciblePolynomialCache")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl IrreduciblePolynomialCache {
    /// Cache backed by the store named in `config`.
    pub fn new(config: CacheConfig) -> Self {
        let store: Arc<dyn RecordStore> = match &config.store {
            StoreLocation::Directory(dir) => Arc::new(FileStore::new(dir.clone())),
            StoreLocation::Memory => Arc::new(MemoryStore::new()),
        };
        Self::with_store(config, store)
    }

    /// Cache backed by a caller-supplied store; `config.store` is ignored.
    pub fn with_store(config: CacheConfig, store: Arc<dyn RecordStore>) -> Self {
        Self {
            config,
            store,
            tables: RwLock::new(HashMap::new()),
        }
    }

    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    /// Highest degree memoized in this process for `prime`.
    pub fn memoized_degree(&self, prime: u64) -> usize {
        self.tables
            .read()
            .get(&prime)
            .map_or(0, |t| t.levels.read().len())
    }

    /// All monic irreducible polynomials of degrees `1..=degree` over
    /// GF(prime), by increasing degree and then generation order.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `prime` is not prime, `degree` is 0, or a degree
    /// is too large to enumerate; `Io`/`CorruptRecord` from the store.
    pub fn compute(&self, prime: u64, degree: usize) -> Result<Vec<Poly<Fp>>> {
        let table = self.ensure(prime, degree, None)?;
        let levels = table.levels.read();
        Ok(levels[..degree].iter().flatten().cloned().collect())
    }

    /// Like [`compute`](Self::compute), stopping between degree levels once
    /// `cancel` is set.
    ///
    /// # Errors
    ///
    /// `Cancelled` names the last degree fully computed; it and all lower
    /// degrees remain memoized and persisted.
    pub fn compute_cancellable(
        &self,
        prime: u64,
        degree: usize,
        cancel: &AtomicBool,
    ) -> Result<Vec<Poly<Fp>>> {
        let table = self.ensure(prime, degree, Some(cancel))?;
        let levels = table.levels.read();
        Ok(levels[..degree].iter().flatten().cloned().collect())
    }

    /// Only the irreducibles of exactly `degree`.
    pub fn irreducibles(&self, prime: u64, degree: usize) -> Result<Vec<Poly<Fp>>> {
        let table = self.ensure(prime, degree, None)?;
        let levels = table.levels.read();
        Ok(levels[degree - 1].clone())
    }

    /// The last element of `compute(prime, degree)`: the polynomial used to
    /// define GF(prime^degree).
    pub fn defining_polynomial(&self, prime: u64, degree: usize) -> Result<Poly<Fp>> {
        let table = self.ensure(prime, degree, None)?;
        let levels = table.levels.read();
        let last = levels[..degree]
            .iter()
            .rev()
            .find_map(|level| level.last().cloned());

        match last {
            Some(poly) if poly.degree() == degree => Ok(poly),
            _ => Err(FieldError::InvalidArgument(format!(
                "no irreducible polynomial of degree {degree} over GF({prime})"
            ))),
        }
    }

    fn table(&self, prime: u64) -> Arc<PrimeTable> {
        if let Some(table) = self.tables.read().get(&prime) {
            return Arc::clone(table);
        }
        Arc::clone(self.tables.write().entry(prime).or_default())
    }

    /// Make sure degrees `1..=degree` are memoized for `prime`.
    fn ensure(
        &self,
        prime: u64,
        degree: usize,
        cancel: Option<&AtomicBool>,
    ) -> Result<Arc<PrimeTable>> {
        if degree == 0 {
            return Err(FieldError::InvalidArgument(
                "degree must be at least 1".to_string(),
            ));
        }
        let field = PrimeField::new(prime)?;
        let table = self.table(prime);

        if table.levels.read().len() >= degree {
            return Ok(table);
        }

        {
            let _guard = table.compute.lock();
            let have = table.levels.read().len();

            for k in have + 1..=degree {
                if cancel.is_some_and(|c| c.load(Ordering::Relaxed)) {
                    debug!("search over GF({prime}) cancelled before degree {k}");
                    return Err(FieldError::Cancelled {
                        completed_degree: k - 1,
                    });
                }

                let level = self.load_or_sieve(field, k, &table)?;
                table.levels.write().push(level);
            }
        }

        Ok(table)
    }

    fn load_or_sieve(
        &self,
        field: PrimeField,
        k: usize,
        table: &PrimeTable,
    ) -> Result<Vec<Poly<Fp>>> {
        let prime = field.characteristic();

        if let Some(record) = self.store.load(prime, k)? {
            debug!(
                "loaded {} irreducible polynomials of degree {k} over GF({prime})",
                record.polynomials.len()
            );
            return Ok(record.to_polys(field));
        }

        let cutoff = self.config.sieve_bound.cutoff(k);
        let candidates: Vec<Poly<Fp>> = {
            let levels = table.levels.read();
            levels[..cutoff.min(levels.len())]
                .iter()
                .flatten()
                .cloned()
                .collect()
        };

        let mut level = Vec::new();
        for f in MonicPolynomials::new(field, k)? {
            let mut irreducible = true;
            for q in &candidates {
                if f.rem(q)?.is_zero() {
                    irreducible = false;
                    break;
                }
            }
            if irreducible {
                level.push(f);
            }
        }

        debug!(
            "sieved {} irreducible polynomials of degree {k} over GF({prime}) (cutoff {cutoff})",
            level.len()
        );

        let record = IrreducibilityRecord::from_polys(prime, k, &level);
        self.store.append(&record)?;

        Ok(level)
    }
}
