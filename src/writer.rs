use crate::curve::{samples, Sample};
use crate::Result;
use std::fs::File;
use std::io::prelude::*;
use std::io::BufWriter;
use std::path::Path;
use tracing::{debug, trace};

/// `x` and `y` separated by a tab, shortest representation that parses
/// back to the same `f64`.
pub fn format_sample(s: &Sample) -> String {
    format!("{}\t{}", lexical::to_string(s.x), lexical::to_string(s.y))
}

/// Writes one line per sample and returns how many lines were written.
pub fn write_samples<W, I>(out: &mut W, samples: I) -> std::io::Result<usize>
where
    W: Write,
    I: IntoIterator<Item = Sample>,
{
    let mut lines = 0;
    for s in samples {
        trace!(line = lines, x = s.x, y = s.y, "sample");
        out.write_fmt(format_args!("{}\n", format_sample(&s)))?;
        lines += 1;
    }
    Ok(lines)
}

/// Creates (or truncates) `path` and stores the whole curve in it.
pub fn write_file<P: AsRef<Path>>(path: P) -> Result<usize> {
    let path = path.as_ref();
    debug!(path = %path.display(), "writing samples");

    let file =
        File::create(path).map_err(|e| format!("cannot create {}: {}", path.display(), e))?;
    let mut bw = BufWriter::new(file);
    let lines = write_samples(&mut bw, samples())
        .map_err(|e| format!("cannot write {}: {}", path.display(), e))?;
    // Drop would discard a failed flush.
    bw.flush()
        .map_err(|e| format!("cannot flush {}: {}", path.display(), e))?;
    drop(bw);

    debug!(path = %path.display(), lines, "samples written");
    Ok(lines)
}
