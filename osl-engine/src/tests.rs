//! Testes integrados para osl-engine

use crate::{Engine, EngineConfig, EvalError, PositionPolicy};
use osl_core::operator::{Effect, EffectMode, Operator, OperatorId, OperatorRegistry};
use osl_core::overrides::OverrideMatrix;
use osl_core::state::{Layer, StateVector};
use osl_core::Typology;

fn seq(ids: &[&str]) -> Vec<Option<OperatorId>> {
    ids.iter()
        .map(|&id| {
            if id == "-" {
                None
            } else {
                Some(OperatorId::from(id))
            }
        })
        .collect()
}

// =============================================================================
// Cenário de referência (golden)
// =============================================================================

/// Sequência [O1..O5] a partir de {L:0.5, P:0.5, A:0.5, R:0.5, V:0.5, ε:0.2}
///
/// Estado final documentado:
/// L=0.89, P=0.55, A=0.4, R=0.2, V=0.3936, ε=0.6
/// decoherence = 0.4944, illusion depth = 0.5036, dominante = CI
#[test]
fn test_golden_reference_scenario() {
    let engine = Engine::reference();
    let result = engine.evaluate(&seq(&["O1", "O2", "O3", "O4", "O5"])).unwrap();

    let s = result.final_state;
    assert!((s.legality - 0.89).abs() < 1e-9);
    assert!((s.privacy - 0.55).abs() < 1e-9);
    assert!((s.autonomy - 0.4).abs() < 1e-9);
    assert!((s.reciprocity - 0.2).abs() < 1e-9);
    assert!((s.visibility - 0.3936).abs() < 1e-9);
    assert!((s.entropy - 0.6).abs() < 1e-9);

    assert!((result.decoherence_score - 0.4944).abs() < 1e-9);
    assert!((result.compliance_illusion_depth - 0.5036).abs() < 1e-9);
    assert!(result.legal_validity);
    assert!(result.autonomy_preserved);

    assert!((result.risk_typology.dg - 0.505).abs() < 1e-9);
    assert!((result.risk_typology.rt - 0.37808).abs() < 1e-9);
    assert!((result.risk_typology.ci - 0.59216).abs() < 1e-9);
    assert!((result.risk_typology.se - 0.51).abs() < 1e-9);
    assert_eq!(result.dominant_typology, Typology::CI);

    // Nenhum passo anulado: O4 vem depois de O2
    assert_eq!(result.execution_trace.len(), 5);
    assert!(result.execution_trace.iter().all(|step| !step.nullified));
}

// =============================================================================
// Propriedades
// =============================================================================

#[test]
fn test_determinism_bit_identical() {
    let engine = Engine::reference();
    let sequence = seq(&["O3", "-", "O6", "O2", "O7"]);

    let a = engine.evaluate(&sequence).unwrap();
    let b = engine.evaluate(&sequence).unwrap();

    assert_eq!(a, b);
    assert_eq!(a.to_json_pretty().unwrap(), b.to_json_pretty().unwrap());
}

#[test]
fn test_non_commutativity_o4_o2() {
    let engine = Engine::reference();

    let first = engine.evaluate(&seq(&["O4", "O2", "O3"])).unwrap();
    let second = engine.evaluate(&seq(&["O2", "O4", "O3"])).unwrap();

    let o2_first = first
        .execution_trace
        .iter()
        .find(|s| s.operator.as_str() == "O2")
        .unwrap();
    let o2_second = second
        .execution_trace
        .iter()
        .find(|s| s.operator.as_str() == "O2")
        .unwrap();

    // O4 antes de O2 anula O2; na ordem inversa, não
    assert!(o2_first.nullified);
    assert!(!o2_second.nullified);
    assert_ne!(first.final_state, second.final_state);
}

#[test]
fn test_positional_amplification_exact_ratio() {
    let engine = Engine::reference();
    let baseline = StateVector::baseline();

    // O1 na primeira posição vs. terceira, sequência de resto idêntica
    let first = engine.evaluate(&seq(&["O1", "-", "-"])).unwrap();
    let third = engine.evaluate(&seq(&["-", "-", "O1"])).unwrap();

    let delta_first = first.final_state.legality - baseline.legality;
    let delta_third = third.final_state.legality - baseline.legality;

    assert!((delta_first - 1.3 * delta_third).abs() < 1e-9);
    assert!((delta_third - 0.3).abs() < 1e-9);
}

#[test]
fn test_bounds_hold_for_every_step() {
    let engine = Engine::reference();
    let result = engine
        .evaluate(&seq(&["O8", "O6", "O7", "O1", "O5", "O2", "O3", "O4"]))
        .unwrap();

    for step in &result.execution_trace {
        for value in step.after.to_array() {
            assert!((0.0..=1.0).contains(&value), "layer out of bounds: {value}");
        }
    }
}

#[test]
fn test_bounds_hold_for_amplified_full_strength_mask() {
    // Catálogo válido (força ≤ 1.0) com mask na primeira posição:
    // Δ = 1.0 × 1.3 e v·(1−Δ) seria negativo sem o clamp no armazenamento
    let registry = OperatorRegistry::new(vec![Operator::new(
        "M1",
        "Total Veil",
        "⬛",
        vec![Effect::new(Layer::Visibility, EffectMode::Mask, 1.0)],
    )])
    .unwrap();
    let matrix = OverrideMatrix::new(vec![]).unwrap();
    let engine = Engine::new(registry, matrix, EngineConfig::default()).unwrap();

    let result = engine.evaluate(&seq(&["M1"])).unwrap();

    let v = result.final_state.visibility;
    assert!((0.0..=1.0).contains(&v), "visibility out of bounds: {v}");
    assert_eq!(v, 0.0);
    // Métricas derivadas permanecem em faixa
    assert!((0.0..=1.0).contains(&result.decoherence_score));
}

#[test]
fn test_suppress_bound_in_sequence() {
    let engine = Engine::reference();
    // O6 aplica suppress em L na primeira posição
    let result = engine.evaluate(&seq(&["O6"])).unwrap();
    let step = &result.execution_trace[0];

    assert!(step.after.legality <= 0.3 * step.before.legality + 1e-12);
    assert_eq!(step.after.reciprocity, 0.0); // nullify
}

#[test]
fn test_empty_sequence_zero_result() {
    let engine = Engine::reference();
    let result = engine.evaluate(&seq(&["-", "-", "-"])).unwrap();

    assert_eq!(result.final_state, StateVector::baseline());
    assert!(result.execution_trace.is_empty());
    for &t in &Typology::ALL {
        assert_eq!(result.risk_typology.get(t), 0.0);
    }
    // Eco posicional preservado
    assert_eq!(result.sequence.len(), 3);
    assert!(result.sequence.iter().all(Option::is_none));
}

#[test]
fn test_unknown_reference_is_eval_error() {
    let engine = Engine::reference();
    let err = engine.evaluate(&seq(&["O1", "Z9"])).unwrap_err();
    assert_eq!(err, EvalError::UnknownReference("Z9".to_string()));
}

// =============================================================================
// Serialização
// =============================================================================

#[test]
fn test_json_round_trip_within_tolerance() {
    let engine = Engine::reference();
    let result = engine.evaluate(&seq(&["O1", "-", "O4", "O2"])).unwrap();

    let json = result.to_json_pretty().unwrap();
    let parsed: crate::ExecutionResult = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed.sequence, result.sequence);
    assert_eq!(parsed.dominant_typology, result.dominant_typology);
    assert_eq!(parsed.legal_validity, result.legal_validity);
    assert_eq!(parsed.execution_trace.len(), result.execution_trace.len());

    let tol = 1e-9;
    assert!((parsed.decoherence_score - result.decoherence_score).abs() < tol);
    assert!((parsed.compliance_illusion_depth - result.compliance_illusion_depth).abs() < tol);
    for (a, b) in parsed
        .final_state
        .to_array()
        .iter()
        .zip(result.final_state.to_array().iter())
    {
        assert!((a - b).abs() < tol);
    }
    for (pa, pb) in parsed.execution_trace.iter().zip(result.execution_trace.iter()) {
        assert_eq!(pa.nullified, pb.nullified);
        for (a, b) in pa.after.to_array().iter().zip(pb.after.to_array().iter()) {
            assert!((a - b).abs() < tol);
        }
    }
}

#[test]
fn test_export_filename_encodes_sequence() {
    let engine = Engine::reference();
    let result = engine.evaluate(&seq(&["O1", "-", "O4"])).unwrap();
    assert_eq!(result.export_filename(), "osl-O1-_-O4.json");
}

// =============================================================================
// Isolamento de catálogos
// =============================================================================

#[test]
fn test_engines_with_distinct_catalogs_do_not_share_state() {
    let registry = OperatorRegistry::new(vec![Operator::new(
        "X1",
        "Solo",
        "∗",
        vec![Effect::new(Layer::Entropy, EffectMode::Amplify, 0.5)],
    )])
    .unwrap();
    let matrix = OverrideMatrix::new(vec![]).unwrap();
    let custom = Engine::new(registry, matrix, EngineConfig::default()).unwrap();
    let reference = Engine::reference();

    assert!(custom.registry().contains(&"X1".into()));
    assert!(!reference.registry().contains(&"X1".into()));
    assert!(custom.evaluate(&seq(&["O1"])).is_err());
}

#[test]
fn test_uniform_policy_removes_first_position_boost() {
    let config = EngineConfig {
        position_policy: PositionPolicy::Uniform,
        ..EngineConfig::default()
    };
    let engine = Engine::new(
        OperatorRegistry::reference(),
        OverrideMatrix::reference(),
        config,
    )
    .unwrap();

    let result = engine.evaluate(&seq(&["O1"])).unwrap();
    assert!((result.final_state.legality - 0.8).abs() < 1e-9);
}
