use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use pgr_core::pricing::{
    calculate_proposal_item, calculate_proposal_item_from_base_price, calculate_proposal_quote,
    compute_technical_hour_rate, get_tax_rate_for_regime, round_for_display, ProposalItemInput,
    ProposalItemResult, ProposalTotalInput, ProposalTotalResult,
};
use pgr_core::psychosocial::catalog::{dimension_metadata, questions_for, CopsoqQuestion};
use pgr_core::psychosocial::{
    aggregate, aggregate_for_questionnaire, build_individual_report, default_dimensions,
    AggregateAnalysis, CopsoqDimension, IndividualReport, QuestionResponse, ResponseSubmission,
};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, info};

use crate::config::Config;
use crate::main_lib::{parse_request, read_input, write_output};

#[derive(Debug, Parser)]
#[command(name = "pgr", version, about = "Proposal pricing and COPSOQ II risk scoring")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Technical-hour rate from a cost basis (falls back to the configured tenant basis)
    TechnicalHour {
        #[arg(long)]
        fixed_costs: Option<Decimal>,
        #[arg(long)]
        pro_labor: Option<Decimal>,
        #[arg(long)]
        productive_hours: Option<Decimal>,
    },
    /// Price one proposal item and print every pipeline stage
    Item {
        /// Request file; stdin when omitted
        #[arg(long)]
        input: Option<PathBuf>,
        /// Take the tax rate from the tenant's rate for this regime
        #[arg(long)]
        regime: Option<String>,
        /// Round each stage to 2 decimal places
        #[arg(long)]
        round: bool,
    },
    /// Total a proposal from priced lines, general discount and displacement fee
    Total {
        #[arg(long)]
        input: Option<PathBuf>,
        #[arg(long)]
        round: bool,
    },
    /// Tenant tax rate for a regime (0 when the regime is not recognized)
    TaxRate { regime: String },
    /// Aggregate COPSOQ submissions into dimension and overall risk
    Analyze {
        /// JSON array of submissions; stdin when omitted
        #[arg(long)]
        input: Option<PathBuf>,
        /// Only aggregate submissions of this questionnaire
        #[arg(long)]
        questionnaire: Option<String>,
    },
    /// Per-dimension report for a single submission
    Individual {
        #[arg(long)]
        input: Option<PathBuf>,
    },
    /// Print the question catalog grouped by dimension
    Questions,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TechnicalHourResponse {
    technical_hour: Decimal,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TaxRateResponse {
    regime: String,
    tax_rate: Decimal,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CatalogDimension {
    dimension: CopsoqDimension,
    name: &'static str,
    description: &'static str,
    subdimensions: &'static [&'static str],
    question_count: usize,
    questions: Vec<&'static CopsoqQuestion>,
}

pub fn run(cli: Cli, config: &Config) -> Result<()> {
    match cli.command {
        Command::TechnicalHour {
            fixed_costs,
            pro_labor,
            productive_hours,
        } => {
            let technical_hour =
                technical_hour(config, fixed_costs, pro_labor, productive_hours)?;
            write_output(&TechnicalHourResponse { technical_hour })
        }
        Command::Item {
            input,
            regime,
            round,
        } => {
            let body = read_input(input.as_deref())?;
            let result = price_item(&body, config, regime.as_deref(), round)?;
            write_output(&result)
        }
        Command::Total { input, round } => {
            let body = read_input(input.as_deref())?;
            write_output(&total_proposal(&body, round)?)
        }
        Command::TaxRate { regime } => {
            let tax_rate = get_tax_rate_for_regime(&regime, &config.tax_rates);
            write_output(&TaxRateResponse { regime, tax_rate })
        }
        Command::Analyze {
            input,
            questionnaire,
        } => {
            let body = read_input(input.as_deref())?;
            write_output(&analyze(&body, questionnaire.as_deref())?)
        }
        Command::Individual { input } => {
            let body = read_input(input.as_deref())?;
            write_output(&individual(&body)?)
        }
        Command::Questions => write_output(&catalog()),
    }
}

fn technical_hour(
    config: &Config,
    fixed_costs: Option<Decimal>,
    pro_labor: Option<Decimal>,
    productive_hours: Option<Decimal>,
) -> Result<Decimal> {
    let configured = config.basis.as_ref();

    let fixed_costs = or_configured(
        fixed_costs,
        configured.map(|b| b.fixed_costs),
        "fixed-costs",
    )?;
    let pro_labor = or_configured(pro_labor, configured.map(|b| b.pro_labor), "pro-labor")?;
    let productive_hours = or_configured(
        productive_hours,
        configured.map(|b| b.productive_hours),
        "productive-hours",
    )?;

    Ok(compute_technical_hour_rate(
        fixed_costs,
        pro_labor,
        productive_hours,
    )?)
}

fn or_configured(arg: Option<Decimal>, configured: Option<Decimal>, flag: &str) -> Result<Decimal> {
    arg.or(configured).ok_or_else(|| {
        anyhow!(
            "--{} is required when no tenant basis is configured",
            flag
        )
    })
}

fn price_item(
    body: &str,
    config: &Config,
    regime: Option<&str>,
    round: bool,
) -> Result<ProposalItemResult> {
    let mut input: ProposalItemInput = parse_request(body)?;

    if let Some(regime) = regime {
        input.tax_rate = get_tax_rate_for_regime(regime, &config.tax_rates);
        debug!("Using {}% tax rate for regime {}", input.tax_rate, regime);
    }

    let result = match &config.basis {
        Some(basis) => calculate_proposal_item(&input, basis)?,
        None => {
            info!("No tenant cost basis configured; pricing from base price");
            calculate_proposal_item_from_base_price(&input)?
        }
    };

    info!(
        "Priced item: discounted value {}",
        round_for_display(result.discounted_value)
    );

    Ok(if round { result.rounded() } else { result })
}

fn total_proposal(body: &str, round: bool) -> Result<ProposalTotalResult> {
    let input: ProposalTotalInput = parse_request(body)?;
    let result = calculate_proposal_quote(&input)?;
    Ok(if round { result.rounded() } else { result })
}

fn analyze(body: &str, questionnaire: Option<&str>) -> Result<AggregateAnalysis> {
    let submissions: Vec<ResponseSubmission> = parse_request(body)?;
    let dimensions = default_dimensions();

    let analysis = match questionnaire {
        Some(id) => aggregate_for_questionnaire(&submissions, id, &dimensions),
        None => {
            let responses: Vec<QuestionResponse> =
                submissions.into_iter().map(|s| s.responses).collect();
            aggregate(&responses, &dimensions)
        }
    };

    info!(
        "Analyzed {} responses: overall risk {}",
        analysis.total_responses, analysis.overall_risk
    );
    Ok(analysis)
}

fn individual(body: &str) -> Result<IndividualReport> {
    let submission: ResponseSubmission = parse_request(body)?;
    Ok(build_individual_report(
        &submission.responses,
        &default_dimensions(),
    ))
}

fn catalog() -> Vec<CatalogDimension> {
    CopsoqDimension::ALL
        .iter()
        .map(|&dimension| {
            let meta = dimension_metadata(dimension);
            let questions: Vec<&'static CopsoqQuestion> = questions_for(dimension).collect();
            CatalogDimension {
                dimension,
                name: meta.name,
                description: meta.description,
                subdimensions: meta.subdimensions,
                question_count: questions.len(),
                questions,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LogFormat;
    use pgr_core::pricing::{PricingBasis, TaxRates};
    use pgr_core::psychosocial::{OverallRisk, RiskLevel};
    use rust_decimal_macros::dec;

    fn tenant_config() -> Config {
        Config {
            basis: Some(PricingBasis::new(dec!(5000), dec!(1000), dec!(160))),
            tax_rates: TaxRates {
                mei: dec!(3.5),
                simples_nacional: dec!(6),
                lucro_presumido: dec!(8),
                autonomo: dec!(11),
            },
            log_format: LogFormat::Text,
        }
    }

    fn unconfigured() -> Config {
        Config {
            basis: None,
            tax_rates: TaxRates::default(),
            log_format: LogFormat::Text,
        }
    }

    #[test]
    fn test_cli_parses_item_command() {
        let cli = Cli::try_parse_from(["pgr", "item", "--regime", "MEI", "--round"]).unwrap();
        match cli.command {
            Command::Item { input, regime, round } => {
                assert!(input.is_none());
                assert_eq!(regime.as_deref(), Some("MEI"));
                assert!(round);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_parses_decimal_arguments() {
        let cli = Cli::try_parse_from([
            "pgr",
            "technical-hour",
            "--fixed-costs",
            "5000",
            "--pro-labor",
            "2000",
            "--productive-hours",
            "160",
        ])
        .unwrap();
        match cli.command {
            Command::TechnicalHour {
                fixed_costs,
                pro_labor,
                productive_hours,
            } => {
                let rate =
                    technical_hour(&unconfigured(), fixed_costs, pro_labor, productive_hours)
                        .unwrap();
                assert_eq!(rate, dec!(43.75));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_technical_hour_falls_back_to_tenant_basis() {
        let rate = technical_hour(&tenant_config(), None, None, None).unwrap();
        assert_eq!(rate, dec!(37.5));
    }

    #[test]
    fn test_technical_hour_requires_basis() {
        let err = technical_hour(&unconfigured(), Some(dec!(1)), None, None).unwrap_err();
        assert!(err.to_string().contains("--pro-labor"));
    }

    #[test]
    fn test_technical_hour_surfaces_invalid_input() {
        let err =
            technical_hour(&unconfigured(), Some(dec!(1)), Some(dec!(1)), Some(dec!(0))).unwrap_err();
        assert!(err.to_string().contains("productiveHours must be positive"));
    }

    #[test]
    fn test_price_item_with_tenant_basis() {
        let body = r#"{"basePrice": 1000, "estimatedHours": 10, "taxRate": 6}"#;
        let result = price_item(body, &tenant_config(), None, false).unwrap();
        assert_eq!(result.technical_hour, dec!(37.5));
        assert_eq!(result.discounted_value, dec!(397.5));
    }

    #[test]
    fn test_price_item_regime_overrides_tax_rate() {
        let body = r#"{"basePrice": 1000, "estimatedHours": 10, "taxRate": 0}"#;
        let result = price_item(body, &tenant_config(), Some("Simples Nacional"), false).unwrap();
        assert_eq!(result.value_with_taxes, dec!(39.75));
    }

    #[test]
    fn test_price_item_without_basis_uses_base_price() {
        let body = r#"{"basePrice": 5000, "estimatedHours": 10, "taxRate": 0}"#;
        let result = price_item(body, &unconfigured(), None, true).unwrap();
        assert_eq!(result.technical_hour, dec!(37.5));
        assert_eq!(result.base_value, dec!(375));
    }

    #[test]
    fn test_price_item_rejects_malformed_json() {
        assert!(price_item("{", &tenant_config(), None, false).is_err());
    }

    #[test]
    fn test_total_proposal() {
        let body = r#"{
            "items": [{"unitPrice": 1000, "quantity": 2}, {"unitPrice": 397.5}],
            "generalDiscount": 100,
            "displacementFee": 50
        }"#;
        let result = total_proposal(body, false).unwrap();
        assert_eq!(result.subtotal, dec!(2397.5));
        assert_eq!(result.total, dec!(2347.5));
    }

    #[test]
    fn test_analyze_filters_by_questionnaire() {
        let body = r#"[
            {"questionnaireId": "a", "responses": {"q1": 4, "q2": 4}},
            {"questionnaireId": "b", "responses": {"q1": 0}}
        ]"#;

        let only_a = analyze(body, Some("a")).unwrap();
        assert_eq!(only_a.total_responses, 1);
        assert_eq!(
            only_a.dimension_scores[&CopsoqDimension::Demands].risk_level,
            RiskLevel::High
        );

        let all = analyze(body, None).unwrap();
        assert_eq!(all.total_responses, 2);
    }

    #[test]
    fn test_analyze_empty_array_has_no_data() {
        let analysis = analyze("[]", None).unwrap();
        assert_eq!(analysis.overall_risk, OverallRisk::NoData);
    }

    #[test]
    fn test_individual_report() {
        let body = r#"{"questionnaireId": "a", "responses": {"q41": 3, "q42": 2}}"#;
        let report = individual(body).unwrap();
        assert_eq!(
            report.dimensions[&CopsoqDimension::Health].average_score,
            dec!(2.5)
        );
    }

    #[test]
    fn test_catalog_lists_all_questions() {
        let dimensions = catalog();
        assert_eq!(dimensions.len(), 7);
        let total: usize = dimensions.iter().map(|d| d.question_count).sum();
        assert_eq!(total, 50);
    }
}
