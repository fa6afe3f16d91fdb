//! OSL - Operator Sequence Lattice
//! Command-line interface for evaluating operator and clause sequences

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use colored::*;
use osl_clause::ClauseEngine;
use osl_core::clause::ClauseId;
use osl_core::operator::OperatorId;
use osl_engine::Engine;
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "osl")]
#[command(author = "OSL Contributors")]
#[command(version = "2026.8.1")]
#[command(about = "OSL - Operator Sequence Lattice", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate an operator sequence (e.g. "O1,O2,-,O4"; "-" is an empty slot)
    Eval {
        /// Comma-separated operator ids
        #[arg(value_name = "SEQUENCE")]
        sequence: String,

        /// Print the full result as JSON instead of the summary
        #[arg(short, long)]
        json: bool,

        /// Export the result to a JSON file (default filename unless given)
        #[arg(short, long, value_name = "FILE", num_args = 0..=1, default_missing_value = "")]
        export: Option<PathBuf>,
    },

    /// Analyse a clause sequence (e.g. "C1,C2,C4")
    Clauses {
        /// Comma-separated clause ids
        #[arg(value_name = "SEQUENCE")]
        sequence: String,

        /// Print the full result as JSON instead of the summary
        #[arg(short, long)]
        json: bool,

        /// Export the result to a JSON file (default filename unless given)
        #[arg(short, long, value_name = "FILE", num_args = 0..=1, default_missing_value = "")]
        export: Option<PathBuf>,
    },

    /// List the reference catalogs
    Catalog,

    /// Show information about OSL
    Info,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Eval { sequence, json, export } => eval_command(&sequence, json, export),
        Commands::Clauses { sequence, json, export } => clauses_command(&sequence, json, export),
        Commands::Catalog => catalog_command(),
        Commands::Info => {
            print_info();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{} {}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}

// ============================================================================
// Sequence parsing
// ============================================================================

/// Parses "O1,O2,-,O4" into slots; "-" and "" are empty slots
fn parse_operator_sequence(input: &str) -> Vec<Option<OperatorId>> {
    input
        .split(',')
        .map(str::trim)
        .map(|part| {
            if part.is_empty() || part == "-" {
                None
            } else {
                Some(OperatorId::from(part))
            }
        })
        .collect()
}

/// Entrada toda vazia é sequência vazia (resultado zero válido);
/// slot vazio no meio de uma sequência não-vazia é erro
fn parse_clause_sequence(input: &str) -> anyhow::Result<Vec<ClauseId>> {
    let parts: Vec<&str> = input.split(',').map(str::trim).collect();
    if parts.iter().all(|part| part.is_empty() || *part == "-") {
        return Ok(Vec::new());
    }

    let mut ids = Vec::new();
    for part in parts {
        if part.is_empty() || part == "-" {
            bail!("clause sequences do not support empty slots");
        }
        ids.push(ClauseId::from(part));
    }
    Ok(ids)
}

// ============================================================================
// Commands
// ============================================================================

fn eval_command(sequence: &str, json: bool, export: Option<PathBuf>) -> anyhow::Result<()> {
    let engine = Engine::reference();
    let slots = parse_operator_sequence(sequence);
    let result = engine.evaluate(&slots)?;

    if result.execution_trace.is_empty() {
        // Entrada vazia é resultado zero válido, não erro
        println!("{}", "empty sequence — state unchanged, zero projection".yellow());
    }

    if json {
        println!("{}", result.to_json_pretty()?);
    } else {
        print_eval_summary(&engine, &result);
    }

    if let Some(path) = export {
        let path = resolve_export_path(path, result.export_filename());
        fs::write(&path, result.to_json_pretty()?)
            .with_context(|| format!("failed to write {}", path.display()))?;
        println!("{} {}", "Exported".green().bold(), path.display());
    }

    Ok(())
}

fn clauses_command(sequence: &str, json: bool, export: Option<PathBuf>) -> anyhow::Result<()> {
    let engine = ClauseEngine::reference();
    let ids = parse_clause_sequence(sequence)?;
    let analysis = engine.analyze(&ids)?;

    if analysis.clause_vector.is_empty() {
        // Entrada vazia é resultado zero válido, não erro
        println!("{}", "empty sequence — zero projection, empty graph".yellow());
    }

    if json {
        println!("{}", analysis.to_json_pretty()?);
    } else {
        print_clause_summary(&analysis);
    }

    if let Some(path) = export {
        let path = resolve_export_path(path, analysis.export_filename());
        fs::write(&path, analysis.to_json_pretty()?)
            .with_context(|| format!("failed to write {}", path.display()))?;
        println!("{} {}", "Exported".green().bold(), path.display());
    }

    Ok(())
}

fn catalog_command() -> anyhow::Result<()> {
    let engine = Engine::reference();

    println!("{}", "Operators".cyan().bold());
    for op in engine.registry().iter() {
        let effects: Vec<String> = op
            .effects
            .iter()
            .map(|e| format!("{}:{:?}({})", e.layer.symbol(), e.mode, e.strength))
            .collect();
        println!(
            "  {} {} {} — {}",
            op.glyph.yellow(),
            op.id.to_string().bold(),
            op.name,
            effects.join(", ")
        );
    }

    println!();
    println!("{}", "Override rules".cyan().bold());
    for rule in engine.matrix().rules() {
        println!(
            "  {} {} {} — {}",
            rule.from.to_string().bold(),
            "⊳".yellow(),
            rule.to.to_string().bold(),
            rule.description
        );
    }

    println!();
    println!("{}", "Clauses".cyan().bold());
    let clause_engine = ClauseEngine::reference();
    for clause in clause_engine.registry().iter() {
        let tags: Vec<&str> = clause.tags.iter().map(|t| t.code()).collect();
        println!(
            "  {} {} [{}] {:?}/{:?} risk={:.2}",
            clause.id.to_string().bold(),
            clause.title,
            tags.join(","),
            clause.strictness,
            clause.transparency,
            clause.risk_level
        );
    }

    Ok(())
}

// ============================================================================
// Output
// ============================================================================

fn print_eval_summary(engine: &Engine, result: &osl_engine::ExecutionResult) {
    println!("{}", "Execution trace".cyan().bold());
    for step in &result.execution_trace {
        let glyph = engine
            .registry()
            .get(&step.operator)
            .map(|op| op.glyph.clone())
            .unwrap_or_default();
        let status = if step.nullified {
            "nullified".red().to_string()
        } else {
            format!("×{:.1}", step.multiplier).green().to_string()
        };
        println!(
            "  [{}] {} {} {} → {}",
            step.index,
            glyph.yellow(),
            step.operator.to_string().bold(),
            status,
            step.after
        );
    }

    println!();
    println!("{}", "Final state".cyan().bold());
    println!("  {}", result.final_state);

    println!();
    println!("{}", "Risk typology".cyan().bold());
    for &t in &osl_core::Typology::ALL {
        let score = result.risk_typology.get(t);
        let marker = if t == result.dominant_typology { "◆" } else { " " };
        println!("  {} {} {:.4} — {}", marker.yellow(), t.code().bold(), score, t.label());
    }

    println!();
    println!(
        "  decoherence: {:.4}  illusion depth: {:.4}  legal: {}  autonomy: {}",
        result.decoherence_score,
        result.compliance_illusion_depth,
        yes_no(result.legal_validity),
        yes_no(result.autonomy_preserved),
    );
}

fn print_clause_summary(analysis: &osl_clause::ClauseAnalysis) {
    println!("{}", "Clauses".cyan().bold());
    for clause in &analysis.clause_vector {
        println!("  {} {}", clause.id.to_string().bold(), clause.title);
    }

    println!();
    println!("{}", "Override graph".cyan().bold());
    if analysis.override_graph.edges.is_empty() {
        println!("  (no edges)");
    }
    for edge in &analysis.override_graph.edges {
        println!(
            "  [{}] {} [{}] ({:?}, {:.2}) — {}",
            edge.source,
            "→".yellow(),
            edge.target,
            edge.kind,
            edge.strength,
            edge.description
        );
    }

    println!();
    println!("{}", "Risk typology".cyan().bold());
    for &t in &osl_core::Typology::ALL {
        let score = analysis.risk_typology.get(t);
        let marker = if t == analysis.dominant_typology { "◆" } else { " " };
        println!("  {} {} {:.4} — {}", marker.yellow(), t.code().bold(), score, t.label());
    }

    if !analysis.pattern_flags.is_empty() {
        println!();
        println!("{}", "Pattern flags".cyan().bold());
        for flag in &analysis.pattern_flags {
            println!("  {}", flag.to_string().magenta());
        }
    }

    if let Some(narrative) = &analysis.narrative {
        println!();
        println!("{}", "Narrative".cyan().bold());
        println!("  {}", narrative);
    }
}

fn resolve_export_path(path: PathBuf, default_name: String) -> PathBuf {
    if path.as_os_str().is_empty() {
        PathBuf::from(default_name)
    } else {
        path
    }
}

fn yes_no(value: bool) -> String {
    if value {
        "yes".green().to_string()
    } else {
        "no".red().to_string()
    }
}


fn print_info() {
    println!("{}", "OSL — Operator Sequence Lattice".cyan().bold());
    println!("Deterministic sequence composition over a six-layer state.");
    println!();
    println!("  layers:     L P A R V ε");
    println!("  operators:  O1–O8 (reference catalog)");
    println!("  clauses:    C1–C7 (reference catalog)");
    println!("  typologies: DG RT CI SE");
    println!();
    println!("Same elements, different order, different result.");
}
