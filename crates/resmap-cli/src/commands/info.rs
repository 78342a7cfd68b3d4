use super::load_structure;
use crate::cli::InfoArgs;
use crate::error::Result;
use std::io::Write;

pub fn run(args: InfoArgs) -> Result<()> {
    let structure = load_structure(&args.input)?;
    let mut out = std::io::stdout().lock();

    writeln!(out, "Structure: {}", args.input.display())?;
    writeln!(
        out,
        "  {} chain(s), {} residue(s), {} atom(s)",
        structure.chain_count(),
        structure.residue_count(),
        structure.atom_count()
    )?;
    for (_, chain) in structure.chains_iter() {
        writeln!(out, "  Chain {}: {} residue(s)", chain.id, chain.residue_count())?;
    }

    if let Some(name) = &args.residue_type {
        writeln!(
            out,
            "Residues of type {}: {}",
            name,
            structure.count_residues_named(name)
        )?;
        for (chain, count) in structure.count_residues_named_per_chain(name) {
            writeln!(out, "  Chain {}: {}", chain, count)?;
        }
    }

    if args.list {
        writeln!(out, "Residues:")?;
        for id in structure.residues_in_order() {
            if let (Some(key), Some(residue)) = (structure.residue_key(id), structure.residue(id)) {
                writeln!(out, "  {} {} ({} atoms)", key, residue.name, residue.atom_count())?;
            }
        }
    }

    Ok(())
}
