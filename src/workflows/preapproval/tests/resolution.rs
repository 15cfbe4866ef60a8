use super::common::*;
use crate::workflows::preapproval::metrics::derive_metrics;
use crate::workflows::preapproval::resolver::{
    Decision, DecisionOutcome, DecisionResolver, UnavailableReason,
};

fn resolve_with(oracle: impl crate::workflows::preapproval::oracle::DecisionOracle) -> DecisionOutcome {
    let config = policy();
    let request = strong_request();
    let metrics = derive_metrics(&request, &liquidity(300_000.0), &config);
    let resolver = DecisionResolver::new(oracle, config);
    resolver.resolve(&profile(), &request, &metrics)
}

#[test]
fn canonical_approve_token_is_accepted() {
    let outcome = resolve_with(ScriptedOracle::replying("approve"));
    assert_eq!(
        outcome,
        DecisionOutcome::Decided {
            decision: Decision::Approve
        }
    );
}

#[test]
fn token_normalization_handles_case_and_whitespace() {
    let outcome = resolve_with(ScriptedOracle::replying("  APPROVE \n"));
    assert_eq!(outcome.decision(), Decision::Approve);

    let outcome = resolve_with(ScriptedOracle::replying("Disapprove"));
    assert_eq!(outcome.decision(), Decision::Disapprove);
}

#[test]
fn out_of_contract_replies_are_forced_to_disapprove() {
    for reply in [
        "approve.",
        "definitely approve",
        "yes",
        "approved",
        "je l'approuve",
        "",
        "approve approve",
    ] {
        let outcome = resolve_with(ScriptedOracle::replying(reply));
        assert_eq!(
            outcome,
            DecisionOutcome::Decided {
                decision: Decision::Disapprove
            },
            "reply {reply:?}"
        );
    }
}

#[test]
fn transport_failure_degrades_to_unavailable() {
    let outcome = resolve_with(FailingOracle);
    assert_eq!(
        outcome,
        DecisionOutcome::Unavailable {
            reason: UnavailableReason::Transport
        }
    );
    assert_eq!(outcome.decision(), Decision::Disapprove);
}

#[test]
fn missing_credentials_degrade_to_unavailable() {
    let outcome = resolve_with(CredentiallessOracle);
    assert_eq!(
        outcome,
        DecisionOutcome::Unavailable {
            reason: UnavailableReason::MissingCredentials
        }
    );
    assert_eq!(outcome.decision(), Decision::Disapprove);
}

#[test]
fn prompt_carries_identity_metrics_and_policy() {
    let oracle = std::sync::Arc::new(ScriptedOracle::replying("approve"));
    let config = policy();
    let request = strong_request();
    let metrics = derive_metrics(&request, &liquidity(300_000.0), &config);
    let resolver = DecisionResolver::new(oracle.clone(), config);

    resolver.resolve(&profile(), &request, &metrics);

    let prompts = oracle.prompts.lock().expect("prompt log poisoned");
    assert_eq!(prompts.len(), 1);
    let prompt = &prompts[0];

    assert!(prompt.contains("Jordan Ellis"));
    assert!(prompt.contains("50309"));
    assert!(prompt.contains("Loan Purpose: Purchase"));
    assert!(prompt.contains("Debt-to-Income ratio <= 50%"));
    assert!(prompt.contains("Down Payment >= 3% of purchase price"));
    assert!(prompt.contains("Monthly Income: 20833.33"));
    assert!(prompt.contains("Down Payment Percentage: 10.00%"));
    assert!(prompt.contains("Liquid Assets: 300000.00"));
    assert!(prompt.contains("Return ONLY one word"));
}
