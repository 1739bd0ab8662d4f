use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::ctx::Ctx;

pub fn write_tsv(path: &Path, ctx: &Ctx) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    let mut w = BufWriter::new(file);

    let parameters = ctx.parameters.as_ref().context("parameters missing")?;

    writeln!(w, "parameter\tsymbol\tvalue\tlo\thi\tcoverage")?;
    for (p, value) in parameters.iter() {
        let bounds = p.bounds();
        let coverage = ctx
            .coverage
            .iter()
            .find(|c| c.parameter == p)
            .map(|c| c.class.key())
            .unwrap_or("-");
        writeln!(
            w,
            "{}\t{}\t{:.6}\t{}\t{}\t{}",
            p.key(),
            p.symbol(),
            value,
            bounds.lo,
            bounds.hi,
            coverage
        )?;
    }
    w.flush()?;
    Ok(())
}
