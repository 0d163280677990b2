use serde::{Deserialize, Serialize};

/// One questionnaire item with its three maturity options.
///
/// Options are ordered least mature to most mature; the score of a selected
/// option is its index plus one. The fixed-size array keeps that invariant in
/// the type rather than in a runtime check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub key: String,
    pub prompt: String,
    pub options: [String; 3],
}

impl Question {
    pub fn new(key: &str, prompt: &str, options: [&str; 3]) -> Self {
        Self {
            key: key.to_string(),
            prompt: prompt.to_string(),
            options: options.map(str::to_string),
        }
    }
}

/// A thematic grouping of questions contributing an independent subtotal.
///
/// Every section also collects one free-text comment at submission time; the
/// comment is persisted alongside the answers but never scored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub name: String,
    pub questions: Vec<Question>,
}

impl Section {
    pub fn new(name: &str, questions: Vec<Question>) -> Self {
        Self {
            name: name.to_string(),
            questions,
        }
    }

    /// Prompt used for the section's comment row in the persisted output.
    pub fn comment_prompt(&self) -> String {
        format!("{} Comments", self.name)
    }
}

/// The full questionnaire: ordered sections, fixed once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    sections: Vec<Section>,
}

impl Catalog {
    pub fn new(sections: Vec<Section>) -> Self {
        Self { sections }
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn question_count(&self) -> usize {
        self.sections
            .iter()
            .map(|section| section.questions.len())
            .sum()
    }

    /// Maximum attainable total: every question answered with the most
    /// mature option.
    pub fn max_score(&self) -> u32 {
        self.question_count() as u32 * 3
    }

    /// The five-section ICSPS questionnaire (34 questions, max score 102).
    pub fn standard() -> Self {
        Self::new(vec![
            fsp_policies_section(),
            data_section(),
            analysis_section(),
            activities_section(),
            funding_section(),
        ])
    }

    /// The extended questionnaire used by later assessment rounds, adding
    /// the Gender Equity and Social Inclusion section (40 questions,
    /// max score 120).
    pub fn with_gesi() -> Self {
        let mut catalog = Self::standard();
        catalog.sections.push(gesi_section());
        catalog
    }
}

fn fsp_policies_section() -> Section {
    Section::new(
        "FSP Policies, Commitment & Political Will",
        vec![
            Question::new(
                "fsp-1",
                "There is a multidisciplinary team responsible for forecasting and supply \
                 planning for vaccines. This can be any working group or unit responsible \
                 for FSP in the MOH",
                [
                    "Absence of a team responsible for forecasting and supply planning for vaccines",
                    "Forecasting and supply planning for vaccines is the responsibility of a few individuals within the MOH",
                    "There is a multidisciplinary team that is tasked with the responsibility of forecasting and supply planning for vaccines",
                ],
            ),
            Question::new(
                "fsp-2",
                "Inclusion of all relevant stakeholders in forecasting and supply planning \
                 for vaccines in the country",
                [
                    "Relevant stakeholders not included",
                    "Limited inclusion of stakeholders",
                    "All relevant stakeholders included",
                ],
            ),
            Question::new(
                "fsp-3",
                "Existence of work plans, MoUs, or TORs for vaccine forecasting and supply \
                 planning (stand-alone or anchored on other documents)",
                [
                    "Absence of ToR, MoU, or work plans for vaccine forecasting and supply planning",
                    "ToR, MoU, or work plans for forecasting and supply planning for vaccines exist but have certain gaps",
                    "Vaccine forecasting and supply planning prioritized in TOR, MoU, or work plans",
                ],
            ),
            Question::new(
                "fsp-4",
                "The TOR covers the following key FSP functions and responsibilities listed; \
                 i) developing work plans, ii) organizing and completing FSP preparatory \
                 activities, iii) developing a forecast and supply plan, iv) ensuring FSP \
                 monitoring and implementation of a continuous improvement plan, v) leading \
                 standardization of FSP processes and training of members, vi) liaising with \
                 and leveraging skills and expertise available in other program areas to \
                 ensure alignment and integration; and, vii) supporting other innovative \
                 activities such as new vaccine introduction",
                [
                    "The TORs does not cover any of the key FSP responsibilities",
                    "The TORs cover at least two of the outlined FSP responsibilities",
                    "The TORs cover at least four FSP responsibilities",
                ],
            ),
            Question::new(
                "fsp-5",
                "The EPI program has a supply chain strategy that covers the following key \
                 technical areas of FSP; Preparatory activities for FSP (e.g. gathering and \
                 ratifying data assumptions and consultation meetings or workshops), \
                 Forecasting, Supply Planning, Pipeline Monitoring, and FSP performance \
                 monitoring",
                [
                    "There is no SC strategy",
                    "There is a SC strategy, but it does not cover any of the key technical areas of FSP",
                    "The SC strategy covers the key technical areas of FSP",
                ],
            ),
            Question::new(
                "fsp-6",
                "Commitment from the relevant stakeholders toward forecasting and supply \
                 planning for vaccines",
                [
                    "No commitment from the relevant stakeholders",
                    "Limited commitment of the relevant stakeholders",
                    "Adequate commitment from relevant stakeholders",
                ],
            ),
            Question::new(
                "fsp-7",
                "Resources allocated for forecasting and supply planning-related tasks",
                [
                    "Resources are lacking for all FSP related tasks",
                    "Resources are limited for FSP related tasks",
                    "Adequate resources are available for all FSP related tasks",
                ],
            ),
        ],
    )
}

fn data_section() -> Section {
    Section::new(
        "Data",
        vec![
            Question::new(
                "data-1",
                "Presence of a reliable system for collecting disaggregated data",
                [
                    "The country lacks a reliable system",
                    "The system has some gaps",
                    "The country has a reliable system",
                ],
            ),
            Question::new(
                "data-2",
                "Access to relevant, quality, and disaggregated data (consumption data by \
                 product, dose and month, wastages - open and closed vial wastage, \
                 adjustments, expiries, etc.)",
                [
                    "Disaggregated data is not available",
                    "Limited access to disaggregated data",
                    "Seamless flow in accessing disaggregated data",
                ],
            ),
            Question::new(
                "data-3",
                "Accuracy of stock balances",
                [
                    "Significant data discrepancy",
                    "Partially accurate data",
                    "Data matches reality/is close to accurate",
                ],
            ),
            Question::new(
                "data-4",
                "Data reporting practices (timeliness of reporting)",
                [
                    "Poor data reporting practices",
                    "Ad-hoc reporting and late updating",
                    "Data is routinely and continuously updated",
                ],
            ),
            Question::new(
                "data-5",
                "Standardized tools for forecasting and supply planning are routinely used",
                [
                    "Tools exist but not used",
                    "Only one tool used",
                    "Both forecasting and supply planning tools used",
                ],
            ),
        ],
    )
}

fn analysis_section() -> Section {
    Section::new(
        "Analysis",
        vec![
            Question::new(
                "analysis-1",
                "Stock status is routinely assessed",
                [
                    "Stock status not assessed",
                    "Untimely assessment of stock status",
                    "Routinely assessed stock status",
                ],
            ),
            Question::new(
                "analysis-2",
                "Methodology used for forecasting vaccines",
                [
                    "Demographic/wastage factor-based",
                    "Consumption-based",
                    "Vaccination session-based",
                ],
            ),
            Question::new(
                "analysis-3",
                "Data from decentralized levels (e.g., regions, districts, facilities) is \
                 used to develop the national forecast and supply plan",
                [
                    "Decentralized data not used for national forecasts",
                    "Partial use of decentralized data",
                    "Data from all levels used for national forecasts",
                ],
            ),
            Question::new(
                "analysis-4",
                "Triangulation of data from different sources when developing national \
                 forecasts, e.g. EPI forecasting tool, stock management tool (SMT), District \
                 Vaccine Data Management Tool (DVD/MT), District Health Information System 2 \
                 (DHIS2), ViVa e.t.c",
                [
                    "Data from one source used",
                    "Data from limited sources used",
                    "Data from all relevant sources used",
                ],
            ),
            Question::new(
                "analysis-5",
                "Calculate and update forecasts based on updated data and discussions with \
                 stakeholders",
                [
                    "Forecasts not calculated or updated",
                    "Forecasts available but not updated with current data",
                    "Accurate forecasts updated based on current data",
                ],
            ),
            Question::new(
                "analysis-6",
                "Forecasts and supply plans developed (determination of what needs to be \
                 ordered by whom and when)",
                [
                    "Unable to determine accurate orders",
                    "Some accuracy in determining orders",
                    "Accurate determination of orders",
                ],
            ),
            Question::new(
                "analysis-7",
                "Forecasting and supply plan report (or supply plan) cover key components of \
                 the quantification report (or supply plan), i.e. Forecasting assumptions \
                 and considerations, Forecasted quantities, Quantities required to fill the \
                 supply pipeline, funding requirement/costs, shipment schedules, including \
                 specific lead times where applicable",
                [
                    "Reports cover 0-2 key components",
                    "Reports cover at least 3 key components",
                    "Reports cover all 5 key components",
                ],
            ),
            Question::new(
                "analysis-8",
                "Conduct scenario monitoring",
                [
                    "Scenario monitoring not conducted",
                    "Poorly conducted scenario monitoring",
                    "Well-conducted scenario monitoring",
                ],
            ),
            Question::new(
                "analysis-9",
                "Ability to estimate the potential for vaccine expiry",
                [
                    "Inability to estimate vaccine expiry",
                    "Limited ability to estimate expiry",
                    "Ability to estimate expiry",
                ],
            ),
        ],
    )
}

fn activities_section() -> Section {
    Section::new(
        "Forecasting and Supply Planning Activities",
        vec![
            Question::new(
                "activities-1",
                "Forecasting and supply planning activities included in the EPI work plans",
                [
                    "Forecasting and supply planning activities not included",
                    "Partially included in EPI work plans",
                    "Adequately included in EPI work plans",
                ],
            ),
            Question::new(
                "activities-2",
                "Forecasting and supply planning activities are inclusive of all relevant \
                 stakeholders (including implementing partners and donors)",
                [
                    "Key stakeholders not included",
                    "Limited participation by relevant stakeholders",
                    "All relevant stakeholders included",
                ],
            ),
            Question::new(
                "activities-3",
                "Regular and routine supply planning meetings scheduled (ideally quarterly \
                 at minimum)",
                [
                    "Meetings not being held",
                    "Irregular/ad-hoc meetings",
                    "Regularly scheduled meetings",
                ],
            ),
            Question::new(
                "activities-4",
                "Forecasting and supply planning meetings review previous actions and \
                 recommendations",
                [
                    "Meetings do not review past actions and recommendations",
                    "Partial review/addressing of past actions and recommendations",
                    "Full review and addressing of past actions and recommendations",
                ],
            ),
            Question::new(
                "activities-5",
                "Flexible to convene ad-hoc meetings to respond to emerging supply planning \
                 (SP) needs",
                [
                    "Lack of flexibility to convene ad hoc meetings",
                    "Limited flexibility to convene ad-hoc meetings",
                    "Flexible to convene ad-hoc meetings",
                ],
            ),
            Question::new(
                "activities-6",
                "Decisions made in a timely and well-coordinated manner",
                [
                    "Decisions not made",
                    "Decisions made in an untimely manner",
                    "Decisions made in a timely manner",
                ],
            ),
            Question::new(
                "activities-7",
                "Decisions are based on evidence",
                [
                    "Decisions not informed by evidence",
                    "Decisions based on limited or incomplete evidence",
                    "Decisions based on evidence",
                ],
            ),
            Question::new(
                "activities-8",
                "Meetings address supply planning risks",
                [
                    "Supply planning meetings address emergencies only",
                    "Supply planning meetings address imminent risks",
                    "Routine monitoring and addressing of supply risks",
                ],
            ),
        ],
    )
}

fn funding_section() -> Section {
    Section::new(
        "Funding and Adjustments of Forecasts and Supply Plans",
        vec![
            Question::new(
                "funding-1",
                "Results of forecasting and supply planning reports are communicated to all \
                 relevant stakeholders",
                [
                    "Results not communicated to stakeholders",
                    "Results partially communicated to stakeholders",
                    "Results communicated to stakeholders",
                ],
            ),
            Question::new(
                "funding-2",
                "Recommended adjustments are communicated to all relevant stakeholders",
                [
                    "Adjustments not communicated to stakeholders",
                    "Adjustments partially communicated to stakeholders",
                    "Adjustments communicated to stakeholders",
                ],
            ),
            Question::new(
                "funding-3",
                "Recommended adjustments are made in a timely and complete fashion",
                [
                    "Adjustments not implemented",
                    "Adjustments partially implemented and/or untimely",
                    "Adjustments implemented in a timely manner",
                ],
            ),
            Question::new(
                "funding-4",
                "Funding is available in a timely manner for total commodity requirement",
                [
                    "Funding not available for total commodity requirement",
                    "Limited funding available for total commodity requirement",
                    "Funding available for total commodity requirement",
                ],
            ),
            Question::new(
                "funding-5",
                "Funding is available to implement the recommended supply plan adjustments \
                 in a timely manner",
                [
                    "Funding not available for recommended adjustments",
                    "Limited funding available for recommended adjustments",
                    "Funding available for recommended adjustments",
                ],
            ),
        ],
    )
}

fn gesi_section() -> Section {
    Section::new(
        "Gender Equity and Social Inclusion",
        vec![
            Question::new(
                "gesi-1",
                "Availability of data disaggregated by sex, age, and geography for \
                 forecasting and supply planning",
                [
                    "Disaggregated data is not available",
                    "Disaggregated data is available for some programme areas or levels",
                    "Disaggregated data is available across programme areas and levels",
                ],
            ),
            Question::new(
                "gesi-2",
                "Use of disaggregated data to inform forecasting assumptions",
                [
                    "Forecasting assumptions do not consider disaggregated data",
                    "Disaggregated data informs some forecasting assumptions",
                    "Disaggregated data routinely informs forecasting assumptions",
                ],
            ),
            Question::new(
                "gesi-3",
                "Equity-aware adjustments to forecasts and supply plans for underserved \
                 populations",
                [
                    "Adjustments do not consider underserved populations",
                    "Some adjustments consider underserved populations",
                    "Adjustments routinely consider underserved populations",
                ],
            ),
            Question::new(
                "gesi-4",
                "Coordination with technical GESI expertise to inform forecasting and \
                 supply planning",
                [
                    "No coordination with GESI expertise",
                    "Ad-hoc coordination with GESI expertise",
                    "Routine and meaningful coordination with GESI expertise",
                ],
            ),
            Question::new(
                "gesi-5",
                "Diverse representation within the FSP team",
                [
                    "No intentional efforts toward diverse representation",
                    "Limited efforts toward diverse representation",
                    "Intentional efforts ensure diverse representation",
                ],
            ),
            Question::new(
                "gesi-6",
                "Understanding of who is being reached by immunization services, who is \
                 not, and why",
                [
                    "Coverage gaps are not analyzed",
                    "Coverage gaps are partially analyzed",
                    "Coverage gaps are routinely analyzed and inform planning",
                ],
            ),
        ],
    )
}
