//! @ai:module:intent Built-in benchmark catalog compiled into the binary
//! @ai:module:layer domain
//! @ai:module:public_api builtin_records
//! @ai:module:stateless true

use crate::catalog::record::{BenchmarkRecord, ValidationMethod};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// @ai:intent Build the six catalogued security benchmarks in display order
///
/// Category lists are partial for some benchmarks; `category_count` holds the
/// published totals.
/// @ai:effects pure
pub fn builtin_records() -> Vec<BenchmarkRecord> {
    vec![
        BenchmarkRecord {
            id: "securityeval".to_string(),
            name: "SecurityEval".to_string(),
            year: 2022,
            sample_count: 130,
            category_count: 75,
            categories: strings(&[
                "CWE-79", "CWE-89", "CWE-78", "CWE-22", "CWE-434", "CWE-94", "CWE-352",
                "CWE-611", "CWE-798", "CWE-306", "CWE-287", "CWE-269", "CWE-276", "CWE-502",
                "CWE-521",
            ]),
            languages: strings(&["Python"]),
            validation_method: ValidationMethod::Manual,
            authors: "Siddiq & Santos".to_string(),
            description: "A Python-only dataset of 130 code snippets covering 75 CWEs, \
                          manually curated from sources like CodeQL examples and CWE descriptions."
                .to_string(),
            key_contribution: "Foundational Python security dataset".to_string(),
            strengths: strings(&[
                "Diverse Python vulnerabilities",
                "Manual curation ensuring quality",
                "Based on real-world examples from CodeQL",
            ]),
            limitations: strings(&[
                "Python-only limits generalizability",
                "No automated test suites",
                "No correct solutions provided",
            ]),
            dataset_source: "CodeQL examples, CWE descriptions".to_string(),
            has_test_suite: false,
            has_secure_examples: false,
            automated_evaluation: false,
        },
        BenchmarkRecord {
            id: "codeguard".to_string(),
            name: "CODEGUARD+".to_string(),
            year: 2024,
            sample_count: 91,
            category_count: 34,
            categories: strings(&[
                "CWE-119", "CWE-120", "CWE-476", "CWE-787", "CWE-416", "CWE-415", "CWE-79",
                "CWE-89", "CWE-78", "CWE-22", "CWE-434", "CWE-502", "CWE-798", "CWE-306",
            ]),
            languages: strings(&["Python", "C", "C++"]),
            validation_method: ValidationMethod::Hybrid,
            authors: "Fu et al.".to_string(),
            description: "A benchmark combining security and correctness with 91 prompts \
                          spanning 34 CWEs for Python and C/C++."
                .to_string(),
            key_contribution: "First to emphasize functional correctness alongside security"
                .to_string(),
            strengths: strings(&[
                "Unit tests for functional correctness",
                "Multi-language support (Python, C/C++)",
                "Combines security with correctness evaluation",
            ]),
            limitations: strings(&[
                "Smaller sample size",
                "Limited to 2-3 programming languages",
                "Adapted from prior benchmarks",
            ]),
            dataset_source: "Adapted from prior benchmarks (Pearce et al.)".to_string(),
            has_test_suite: true,
            has_secure_examples: true,
            automated_evaluation: true,
        },
        BenchmarkRecord {
            id: "codeseceval".to_string(),
            name: "CodeSecEval".to_string(),
            year: 2024,
            sample_count: 180,
            category_count: 44,
            categories: strings(&[
                "CWE-79", "CWE-89", "CWE-78", "CWE-22", "CWE-434", "CWE-94", "CWE-352",
                "CWE-611", "CWE-798", "CWE-306", "CWE-287", "CWE-269", "CWE-276", "CWE-502",
                "CWE-521", "CWE-918", "CWE-476", "CWE-787", "CWE-119", "CWE-120", "CWE-416",
                "CWE-415", "CWE-125", "CWE-131", "CWE-134", "CWE-190", "CWE-200", "CWE-250",
                "CWE-252", "CWE-295", "CWE-297", "CWE-326", "CWE-327", "CWE-330", "CWE-331",
                "CWE-335", "CWE-338", "CWE-340", "CWE-362", "CWE-400", "CWE-426", "CWE-427",
                "CWE-428",
            ]),
            languages: strings(&["Python"]),
            validation_method: ValidationMethod::Hybrid,
            authors: "Wang et al.".to_string(),
            description: "A carefully curated Python benchmark with 180 samples covering 44 \
                          critical CWEs. Split into SecEvalBase (67 examples, 37 CWEs, refined \
                          from SecurityEval) and SecEvalPlus (113 examples, 14 CWE types from \
                          CWE Top 25 2023)."
                .to_string(),
            key_contribution:
                "Refinement of SecurityEval with focus on critical CWEs and CWE Top 25"
                    .to_string(),
            strengths: strings(&[
                "Systematic coverage of CWE Top 25 2023",
                "All code is executable and testable",
                "Graduate student validation for quality",
                "Both insecure and secure code examples",
                "Two-part structure: broad coverage + critical focus",
            ]),
            limitations: strings(&[
                "Python-only limits cross-language insights",
                "Smaller scale compared to automated benchmarks",
                "Builds upon existing SecurityEval foundation",
                "Manual curation limits scalability",
            ]),
            dataset_source: "SecurityEval refinement + CWE Top 25 2023".to_string(),
            has_test_suite: true,
            has_secure_examples: true,
            automated_evaluation: true,
        },
        BenchmarkRecord {
            id: "seccodeplt".to_string(),
            name: "SecCodePLT".to_string(),
            year: 2024,
            sample_count: 1345,
            category_count: 27,
            categories: strings(&[
                "CWE-79", "CWE-89", "CWE-78", "CWE-22", "CWE-434", "CWE-94", "CWE-352",
                "CWE-611", "CWE-798", "CWE-306", "CWE-287", "CWE-269", "CWE-276", "CWE-502",
                "CWE-521", "CWE-918", "CWE-476", "CWE-787", "CWE-119", "CWE-120", "CWE-416",
                "CWE-415", "CWE-190", "CWE-863", "CWE-862", "CWE-732", "CWE-829",
            ]),
            languages: strings(&["Python"]),
            validation_method: ValidationMethod::Dynamic,
            authors: "Yang et al.".to_string(),
            description: "A Python-only platform starting from 27 seed tasks covering 27 \
                          critical Python CWEs. Using LLM-based mutation, expanded to 1,345 \
                          samples total (about 50 samples per CWE with 5 test cases each)."
                .to_string(),
            key_contribution: "Leverages LLMs for scalable benchmark creation".to_string(),
            strengths: strings(&[
                "Large scale (1,345 samples from 27 seeds)",
                "Dynamic test oracles for each sample",
                "LLM-based generation for scale and variety",
                "Expert-curated seeds with automated expansion",
                "Combines quality (expert seeds) with quantity (LLM mutation)",
            ]),
            limitations: strings(&[
                "Python-only limits cross-language applicability",
                "Dependent on LLM generation quality",
                "May have less diversity in generation patterns",
                "Mutation-based approach may introduce biases",
            ]),
            dataset_source: "27 expert-curated seed tasks + LLM-based mutation".to_string(),
            has_test_suite: true,
            has_secure_examples: true,
            automated_evaluation: true,
        },
        BenchmarkRecord {
            id: "cweval".to_string(),
            name: "CWEval-Bench".to_string(),
            year: 2025,
            sample_count: 119,
            category_count: 31,
            categories: strings(&[
                // C-specific memory vulnerabilities
                "CWE-119", "CWE-120", "CWE-476", "CWE-787", "CWE-416", "CWE-415", "CWE-190",
                "CWE-131", "CWE-122", "CWE-125", "CWE-134",
                // cross-language
                "CWE-79", "CWE-89", "CWE-78", "CWE-22", "CWE-434", "CWE-94", "CWE-352",
                "CWE-611", "CWE-798", "CWE-306", "CWE-287", "CWE-269", "CWE-276", "CWE-502",
                "CWE-521", "CWE-918", "CWE-863", "CWE-862", "CWE-732", "CWE-829",
            ]),
            languages: strings(&["Python", "Java", "JavaScript", "C", "C++"]),
            validation_method: ValidationMethod::Dynamic,
            authors: "Peng et al.".to_string(),
            description: "A multilingual benchmark with 119 security-critical tasks spanning \
                          31 CWEs across 5 programming languages. Includes 11 C-specific memory \
                          vulnerabilities and emphasizes dynamic analysis with reduced \
                          third-party dependencies."
                .to_string(),
            key_contribution:
                "Focus on dynamic analysis for runtime vulnerabilities with multilingual support"
                    .to_string(),
            strengths: strings(&[
                "Multilingual support (5 languages)",
                "Dynamic analysis with runtime vulnerability detection",
                "Reduced third-party dependencies for easier setup",
                "Rigorous evaluation with test oracles and reference implementations",
                "Outcome-driven evaluation (CWEval framework)",
                "Special focus on C/C++ memory vulnerabilities",
            ]),
            limitations: strings(&[
                "Smaller sample size per language (119 total)",
                "Newer benchmark with less community validation",
                "Complex setup across multiple programming languages",
                "May require language-specific compilation environments",
            ]),
            dataset_source: "Multi-language security-critical tasks with clear specifications"
                .to_string(),
            has_test_suite: true,
            has_secure_examples: true,
            automated_evaluation: true,
        },
        BenchmarkRecord {
            id: "cyberseceval".to_string(),
            name: "CyberSecEval".to_string(),
            year: 2023,
            sample_count: 1920,
            category_count: 50,
            // Authored with repeated entries (CWE-829, CWE-732, CWE-276, CWE-269).
            categories: strings(&[
                "CWE-79", "CWE-89", "CWE-78", "CWE-22", "CWE-434", "CWE-94", "CWE-352",
                "CWE-611", "CWE-798", "CWE-306", "CWE-287", "CWE-269", "CWE-276", "CWE-502",
                "CWE-521", "CWE-918", "CWE-476", "CWE-787", "CWE-119", "CWE-120", "CWE-416",
                "CWE-415", "CWE-190", "CWE-863", "CWE-862", "CWE-732", "CWE-829", "CWE-20",
                "CWE-200", "CWE-134", "CWE-122", "CWE-125", "CWE-131", "CWE-426", "CWE-427",
                "CWE-428", "CWE-829", "CWE-732", "CWE-276", "CWE-269", "CWE-250", "CWE-252",
                "CWE-295", "CWE-297", "CWE-326", "CWE-327", "CWE-330", "CWE-331", "CWE-335",
                "CWE-338", "CWE-340",
            ]),
            languages: strings(&[
                "Python", "Java", "JavaScript", "C", "C++", "Go", "Rust", "PHP",
            ]),
            validation_method: ValidationMethod::Static,
            authors: "Bhatt et al. (Meta - Purple Llama Team)".to_string(),
            description: "A comprehensive automated benchmark from Meta with 189 static \
                          analysis rules capturing 50 CWEs across 8 programming languages."
                .to_string(),
            key_contribution: "Large scale, broad language coverage, proactive security"
                .to_string(),
            strengths: strings(&[
                "Largest scale (1,920 samples)",
                "Broad language coverage (8 languages)",
                "Real code examples from open-source repos",
                "Automated static analysis rules",
            ]),
            limitations: strings(&[
                "Relies on static analysis only",
                "No code execution validation",
                "May miss runtime vulnerabilities",
                "Static rules may have false positives",
            ]),
            dataset_source: "Open-source repository scanning".to_string(),
            has_test_suite: false,
            has_secure_examples: false,
            automated_evaluation: true,
        },
    ]
}
