use super::super::domain::{Applicability, Category, Criterion, CriterionId};

struct Row(
    &'static str,
    &'static str,
    &'static str,
    u32,
    Applicability,
    bool,
);

pub(super) fn standard_criteria() -> Vec<Criterion> {
    use Applicability::{Both, LegalEntity, NaturalPerson};

    #[rustfmt::skip]
    let rows = [
        Row("PRICE_BELOW_MARKET", Category::PRICE, "Below market average", 15, Both, false),
        Row("PRICE_AT_MARKET", Category::PRICE, "In line with market average", 10, Both, false),
        Row("PRICE_ABOVE_MARKET", Category::PRICE, "Above market average", 5, Both, false),
        Row("QUALITY_ISO_9001", Category::QUALITY, "ISO 9001 certified quality system", 5, LegalEntity, true),
        Row("QUALITY_ISO_17025", Category::QUALITY, "ISO/IEC 17025 accredited laboratory", 5, LegalEntity, true),
        Row("QUALITY_RBC_ACCREDITED", Category::QUALITY, "Member of the national calibration network", 5, Both, true),
        Row("QUALITY_TRACEABLE_STANDARDS", Category::QUALITY, "Uses traceable reference standards", 3, Both, false),
        Row("DELIVERY_UP_TO_5_DAYS", Category::DELIVERY_TIME, "Delivers within 5 business days", 15, Both, false),
        Row("DELIVERY_UP_TO_15_DAYS", Category::DELIVERY_TIME, "Delivers within 15 business days", 10, Both, false),
        Row("DELIVERY_OVER_15_DAYS", Category::DELIVERY_TIME, "Delivers after 15 business days", 5, Both, false),
        Row("WARRANTY_OVER_12_MONTHS", Category::WARRANTY, "Warranty longer than 12 months", 15, Both, false),
        Row("WARRANTY_UP_TO_12_MONTHS", Category::WARRANTY, "Warranty of up to 12 months", 10, Both, false),
        Row("WARRANTY_NONE", Category::WARRANTY, "No warranty offered", 0, Both, false),
        Row("EXPERIENCE_OVER_5_YEARS", Category::EXPERIENCE, "More than 5 years in the market", 15, Both, false),
        Row("EXPERIENCE_1_TO_5_YEARS", Category::EXPERIENCE, "Between 1 and 5 years in the market", 10, Both, false),
        Row("EXPERIENCE_UNDER_1_YEAR", Category::EXPERIENCE, "Less than 1 year in the market", 5, Both, false),
        Row("TAX_SIMPLIFIED_REGIME", Category::TAX_REGIME, "Simplified national tax regime", 15, LegalEntity, false),
        Row("TAX_PRESUMED_PROFIT", Category::TAX_REGIME, "Presumed profit tax regime", 10, LegalEntity, false),
        Row("TAX_ACTUAL_PROFIT", Category::TAX_REGIME, "Actual profit tax regime", 5, LegalEntity, false),
        Row("TAX_INDIVIDUAL_TAXPAYER", Category::TAX_REGIME, "Individual taxpayer with service invoice", 10, NaturalPerson, false),
        Row("PAYMENT_OVER_30_DAYS", Category::PAYMENT_TERMS, "Payment term longer than 30 days", 15, Both, false),
        Row("PAYMENT_UP_TO_30_DAYS", Category::PAYMENT_TERMS, "Payment term of up to 30 days", 10, Both, false),
        Row("PAYMENT_IN_ADVANCE", Category::PAYMENT_TERMS, "Payment required in advance", 5, Both, false),
    ];

    rows.into_iter()
        .map(
            |Row(id, category, name, base_score, applicability, requires_qualifier)| Criterion {
                id: CriterionId::new(id),
                category: Category::new(category),
                name: name.to_string(),
                base_score,
                applicability,
                requires_qualifier,
            },
        )
        .collect()
}
