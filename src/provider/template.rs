//! Template Provider
//!
//! Deterministic provider that classifies the prompt by keyword and answers
//! with a fixed strategy template per legal category. Used for local
//! development and whenever no remote model is configured.

use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use rand::Rng;

use super::{Generation, StrategyProvider};

/// Default simulated latency bounds, in milliseconds
const DEFAULT_DELAY_MS: (u64, u64) = (500, 2000);

/// Legal category recognized by keyword
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegalCategory {
    Contract,
    Criminal,
    CivilRights,
    Corporate,
    FamilyLaw,
    General,
}

impl LegalCategory {
    /// Keyword table, checked in order; first match wins
    const KEYWORDS: [(LegalCategory, &'static [&'static str]); 5] = [
        (LegalCategory::Contract, &["contract"]),
        (LegalCategory::Criminal, &["criminal", "defendant"]),
        (LegalCategory::CivilRights, &["civil rights", "discrimination"]),
        (LegalCategory::Corporate, &["corporate", "business"]),
        (LegalCategory::FamilyLaw, &["family", "divorce"]),
    ];

    /// Case-insensitive substring classification
    pub fn classify(prompt: &str) -> Self {
        let lower = prompt.to_lowercase();
        Self::KEYWORDS
            .iter()
            .find(|(_, words)| words.iter().any(|w| lower.contains(w)))
            .map(|(category, _)| *category)
            .unwrap_or(LegalCategory::General)
    }

    pub fn template(&self) -> &'static str {
        match self {
            LegalCategory::Contract => CONTRACT_STRATEGY,
            LegalCategory::Criminal => CRIMINAL_STRATEGY,
            LegalCategory::CivilRights => CIVIL_RIGHTS_STRATEGY,
            LegalCategory::Corporate => CORPORATE_STRATEGY,
            LegalCategory::FamilyLaw => FAMILY_LAW_STRATEGY,
            LegalCategory::General => GENERAL_STRATEGY,
        }
    }
}

/// Keyword-template strategy provider
#[derive(Debug, Clone)]
pub struct TemplateProvider {
    min_delay: Duration,
    max_delay: Duration,
}

impl Default for TemplateProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateProvider {
    pub fn new() -> Self {
        Self::with_delay(
            Duration::from_millis(DEFAULT_DELAY_MS.0),
            Duration::from_millis(DEFAULT_DELAY_MS.1),
        )
    }

    /// Create with custom latency bounds; bounds are swapped if reversed
    pub fn with_delay(min: Duration, max: Duration) -> Self {
        let (min_delay, max_delay) = if min <= max { (min, max) } else { (max, min) };
        Self {
            min_delay,
            max_delay,
        }
    }

    /// No simulated latency
    pub fn instant() -> Self {
        Self::with_delay(Duration::ZERO, Duration::ZERO)
    }

    fn pick_delay(&self) -> Duration {
        if self.min_delay == self.max_delay {
            return self.min_delay;
        }
        let millis = rand::thread_rng()
            .gen_range(self.min_delay.as_millis() as u64..=self.max_delay.as_millis() as u64);
        Duration::from_millis(millis)
    }
}

#[async_trait]
impl StrategyProvider for TemplateProvider {
    async fn generate(&self, prompt: &str) -> Result<Generation> {
        let delay = self.pick_delay();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        let category = LegalCategory::classify(prompt);
        tracing::debug!(?category, delay_ms = delay.as_millis() as u64, "Template strategy selected");
        Ok(Generation::from_text(category.template()))
    }

    fn is_available(&self) -> bool {
        true
    }

    fn name(&self) -> &str {
        "fake"
    }
}

// =============================================================================
// TEMPLATES
// =============================================================================

const CONTRACT_STRATEGY: &str = r#"## Contract Law Strategy

### Initial Assessment
Based on the contract dispute described, we need to conduct a comprehensive analysis of the contractual relationship and potential breach.

### Key Strategic Points:
1. **Contract Review**: Examine all terms, conditions, and performance obligations
2. **Breach Analysis**: Document specific failures and their impact
3. **Damages Calculation**: Quantify financial losses and mitigation efforts
4. **Remedy Evaluation**: Consider specific performance vs. monetary damages

### Recommended Actions:
- Gather all contract documentation and correspondence
- Document the timeline of events and missed deadlines
- Calculate actual and consequential damages
- Review any force majeure or excuse provisions
- Consider settlement negotiations before litigation

### Legal Precedents:
- Material breach doctrine applies when failure substantially defeats contract purpose
- Duty to mitigate damages requires reasonable efforts to minimize losses
- Specific performance available when monetary damages inadequate

**Next Steps**: Schedule client meeting to review documentation and develop comprehensive damages analysis."#;

const CRIMINAL_STRATEGY: &str = r#"## Criminal Defense Strategy

### Constitutional Framework
All criminal defense must be grounded in constitutional protections and due process rights.

### Defense Strategy Elements:
1. **Evidence Suppression**: Challenge illegally obtained evidence
2. **Witness Credibility**: Examine prosecution witnesses for bias/inconsistencies  
3. **Burden of Proof**: Hold prosecution to "beyond reasonable doubt" standard
4. **Procedural Defenses**: Identify any due process violations

### Investigative Priorities:
- Review arrest procedures and Miranda warnings
- Analyze search and seizure circumstances
- Interview potential defense witnesses
- Examine chain of custody for physical evidence

### Key Precedents:
- Miranda v. Arizona: Custodial interrogation protections
- Terry v. Ohio: Stop and frisk limitations
- Brady v. Maryland: Prosecution disclosure obligations

**Immediate Actions**: File discovery motions and begin independent investigation while preserving all exculpatory evidence."#;

const CIVIL_RIGHTS_STRATEGY: &str = r#"## Civil Rights Legal Strategy

### Federal Law Framework
Civil rights violations may be addressed under Section 1983, Title VII, ADA, or other federal statutes.

### Strategic Approach:
1. **Documentation**: Preserve all evidence of discriminatory conduct
2. **Pattern Analysis**: Identify systemic vs. individual discrimination
3. **Damage Assessment**: Calculate economic and non-economic harm
4. **Injunctive Relief**: Seek prospective remedies to prevent future violations

### Legal Theories:
- Disparate treatment based on protected characteristics
- Disparate impact on protected groups
- Retaliation for protected activity
- Failure to accommodate disabilities

### Precedent Analysis:
- McDonnell Douglas burden-shifting framework
- Faragher/Ellerth affirmative defense standards
- Section 1983 qualified immunity analysis

**Recommended Steps**: File EEOC charge if applicable, document continuing violations, and prepare comprehensive damages analysis."#;

const CORPORATE_STRATEGY: &str = r#"## Corporate Law Strategy

### Governance Framework
Corporate matters require careful analysis of fiduciary duties, regulatory compliance, and stakeholder interests.

### Strategic Considerations:
1. **Fiduciary Duties**: Director and officer obligations to shareholders
2. **Regulatory Compliance**: SEC, industry-specific, and state law requirements
3. **Transaction Structure**: Optimize legal and tax implications
4. **Risk Management**: Identify and mitigate potential liabilities

### Key Areas:
- Board governance and committee structure
- Shareholder rights and proxy matters
- Merger and acquisition due diligence
- Securities law compliance

### Legal Standards:
- Business Judgment Rule protection for informed decisions
- Entire Fairness review for conflicted transactions
- Revlon duties in sale of control situations

**Action Items**: Conduct governance audit, review board procedures, and ensure regulatory compliance across all business units."#;

const FAMILY_LAW_STRATEGY: &str = r#"## Family Law Strategy

### Best Interests Standard
All family law matters involving children must prioritize the best interests of the child.

### Strategic Framework:
1. **Asset Division**: Identify and value all marital property
2. **Custody Arrangements**: Develop parenting plan focused on children's needs
3. **Support Calculations**: Apply state guidelines for child and spousal support
4. **Future Planning**: Consider long-term financial and parenting implications

### Key Considerations:
- Marital vs. separate property classification
- Child custody and visitation schedules
- Tax implications of property transfers
- Enforceability of prenuptial agreements

### Collaborative Approach:
- Mediation and collaborative law options
- Child advocate or guardian ad litem involvement
- Mental health professional consultation

**Next Steps**: Complete financial disclosure, develop proposed parenting plan, and explore alternative dispute resolution options."#;

const GENERAL_STRATEGY: &str = r#"## Legal Strategy Analysis

### Initial Case Assessment
This matter requires comprehensive legal analysis to identify viable claims, defenses, and strategic options.

### Strategic Framework:
1. **Legal Research**: Identify applicable statutes, regulations, and precedents
2. **Fact Development**: Gather evidence and witness testimony
3. **Risk Assessment**: Evaluate strengths, weaknesses, and potential outcomes
4. **Cost-Benefit Analysis**: Compare litigation costs to potential recovery

### Procedural Considerations:
- Statute of limitations and filing deadlines
- Jurisdiction and venue selection
- Discovery scope and timeline
- Settlement vs. litigation decision points

### Recommended Approach:
- Conduct thorough legal research on novel issues
- Interview all potential witnesses
- Preserve relevant documents and evidence
- Consider alternative dispute resolution options

**Immediate Actions**: Begin fact investigation, research applicable law, and evaluate early settlement possibilities.

*Note: This analysis is based on limited information and should be refined as additional facts become available.*"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_keywords() {
        assert_eq!(LegalCategory::classify("breach of CONTRACT"), LegalCategory::Contract);
        assert_eq!(LegalCategory::classify("the defendant was arrested"), LegalCategory::Criminal);
        assert_eq!(LegalCategory::classify("Criminal trespass"), LegalCategory::Criminal);
        assert_eq!(
            LegalCategory::classify("workplace discrimination claim"),
            LegalCategory::CivilRights
        );
        assert_eq!(LegalCategory::classify("Civil Rights violation"), LegalCategory::CivilRights);
        assert_eq!(LegalCategory::classify("small business dispute"), LegalCategory::Corporate);
        assert_eq!(LegalCategory::classify("contested divorce"), LegalCategory::FamilyLaw);
        assert_eq!(LegalCategory::classify("slip and fall at a store"), LegalCategory::General);
    }

    #[test]
    fn test_first_category_wins() {
        // "business" and "divorce" appear too, but contract is checked first
        let prompt = "divorce settlement involving a business contract";
        assert_eq!(LegalCategory::classify(prompt), LegalCategory::Contract);

        let prompt = "family business owner is a defendant";
        assert_eq!(LegalCategory::classify(prompt), LegalCategory::Criminal);
    }

    #[test]
    fn test_substring_match() {
        // "subcontractor" contains "contract"
        assert_eq!(
            LegalCategory::classify("unpaid subcontractor invoices"),
            LegalCategory::Contract
        );
    }

    #[test]
    fn test_with_delay_orders_bounds() {
        let provider = TemplateProvider::with_delay(Duration::from_millis(50), Duration::from_millis(10));
        assert_eq!(provider.min_delay, Duration::from_millis(10));
        assert_eq!(provider.max_delay, Duration::from_millis(50));
        let delay = provider.pick_delay();
        assert!(delay >= provider.min_delay && delay <= provider.max_delay);
    }

    #[tokio::test]
    async fn test_generate_contract_template_verbatim() {
        let provider = TemplateProvider::instant();
        let generation = provider
            .generate("Suggest a strategy for this Contract dispute")
            .await
            .unwrap();
        assert_eq!(generation.text, CONTRACT_STRATEGY);
        assert_eq!(generation.tokens_used, None);
    }

    #[test]
    fn test_criminal_template_keeps_trailing_whitespace() {
        let text = LegalCategory::Criminal.template();
        assert!(text.contains("witnesses for bias/inconsistencies  \n3. **Burden of Proof**"));
    }

    #[tokio::test]
    async fn test_generate_general_fallback() {
        let provider = TemplateProvider::instant();
        let generation = provider.generate("A neighbor's tree fell on my car").await.unwrap();
        assert_eq!(generation.text, GENERAL_STRATEGY);
    }

    #[tokio::test(start_paused = true)]
    async fn test_generate_waits_simulated_latency() {
        let provider =
            TemplateProvider::with_delay(Duration::from_millis(500), Duration::from_millis(2000));
        let started = tokio::time::Instant::now();
        provider.generate("any prompt at all").await.unwrap();
        let elapsed = started.elapsed();
        assert!(elapsed >= Duration::from_millis(500));
        assert!(elapsed <= Duration::from_millis(2001));
    }

    #[test]
    fn test_always_available() {
        let provider = TemplateProvider::new();
        assert!(provider.is_available());
        assert_eq!(provider.name(), "fake");
    }
}
