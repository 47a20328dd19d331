use anyhow::Result;
use serde::Serialize;
use tabled::{Table, Tabled};
use vektora_lib::types::{
    ApprovalRole, ApprovalRoleGroup, PowerBiReportRoleMapping, PriceRule, Quotation, User,
};

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
}

impl OutputFormat {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "json" => OutputFormat::Json,
            "csv" => OutputFormat::Csv,
            _ => OutputFormat::Table,
        }
    }
}

#[derive(Tabled, Serialize)]
struct UserRow {
    #[tabled(rename = "Id")]
    #[serde(rename = "Id")]
    id: i64,
    #[tabled(rename = "Username")]
    #[serde(rename = "Username")]
    username: String,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Email")]
    #[serde(rename = "Email")]
    email: String,
    #[tabled(rename = "Active")]
    #[serde(rename = "Active")]
    active: String,
    #[tabled(rename = "Created")]
    #[serde(rename = "Created")]
    created: String,
}

#[derive(Tabled, Serialize)]
struct ApprovalRoleRow {
    #[tabled(rename = "Id")]
    #[serde(rename = "Id")]
    id: i64,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Level")]
    #[serde(rename = "Level")]
    level: i32,
    #[tabled(rename = "Max Amount")]
    #[serde(rename = "Max Amount")]
    max_amount: String,
    #[tabled(rename = "Active")]
    #[serde(rename = "Active")]
    active: String,
}

#[derive(Tabled, Serialize)]
struct RoleGroupRow {
    #[tabled(rename = "Id")]
    #[serde(rename = "Id")]
    id: i64,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Roles")]
    #[serde(rename = "Roles")]
    roles: String,
    #[tabled(rename = "Description")]
    #[serde(rename = "Description")]
    description: String,
}

#[derive(Tabled, Serialize)]
struct ReportMappingRow {
    #[tabled(rename = "Id")]
    #[serde(rename = "Id")]
    id: i64,
    #[tabled(rename = "Report")]
    #[serde(rename = "Report")]
    report: String,
    #[tabled(rename = "Report Id")]
    #[serde(rename = "Report Id")]
    report_id: String,
    #[tabled(rename = "Role Id")]
    #[serde(rename = "Role Id")]
    role_id: i64,
}

#[derive(Tabled, Serialize)]
struct QuotationRow {
    #[tabled(rename = "Id")]
    #[serde(rename = "Id")]
    id: i64,
    #[tabled(rename = "Number")]
    #[serde(rename = "Number")]
    number: String,
    #[tabled(rename = "Customer")]
    #[serde(rename = "Customer")]
    customer: String,
    #[tabled(rename = "Total")]
    #[serde(rename = "Total")]
    total: String,
    #[tabled(rename = "Status")]
    #[serde(rename = "Status")]
    status: String,
    #[tabled(rename = "Valid Until")]
    #[serde(rename = "Valid Until")]
    valid_until: String,
}

#[derive(Tabled, Serialize)]
struct PriceRuleRow {
    #[tabled(rename = "Id")]
    #[serde(rename = "Id")]
    id: i64,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Product")]
    #[serde(rename = "Product")]
    product: String,
    #[tabled(rename = "Discount")]
    #[serde(rename = "Discount")]
    discount: String,
    #[tabled(rename = "Min Qty")]
    #[serde(rename = "Min Qty")]
    min_quantity: i64,
    #[tabled(rename = "Active")]
    #[serde(rename = "Active")]
    active: String,
}

// -- Row builders --

fn build_user_rows(users: &[User]) -> Vec<UserRow> {
    users
        .iter()
        .map(|u| UserRow {
            id: u.id,
            username: u.username.clone(),
            name: u.full_name(),
            email: u.email.clone(),
            active: format_flag(u.is_active),
            created: u.created_date.format("%Y-%m-%d").to_string(),
        })
        .collect()
}

fn build_approval_role_rows(roles: &[ApprovalRole]) -> Vec<ApprovalRoleRow> {
    roles
        .iter()
        .map(|r| ApprovalRoleRow {
            id: r.id,
            name: r.name.clone(),
            level: r.approval_level,
            max_amount: r
                .max_amount
                .map(format_amount)
                .unwrap_or_else(|| "unlimited".to_string()),
            active: format_flag(r.is_active),
        })
        .collect()
}

fn build_role_group_rows(groups: &[ApprovalRoleGroup]) -> Vec<RoleGroupRow> {
    groups
        .iter()
        .map(|g| RoleGroupRow {
            id: g.id,
            name: g.name.clone(),
            roles: g
                .role_ids
                .iter()
                .map(|id| id.to_string())
                .collect::<Vec<_>>()
                .join(","),
            description: g.description.clone().unwrap_or_default(),
        })
        .collect()
}

fn build_report_mapping_rows(mappings: &[PowerBiReportRoleMapping]) -> Vec<ReportMappingRow> {
    mappings
        .iter()
        .map(|m| ReportMappingRow {
            id: m.id,
            report: m.report_name.clone(),
            report_id: m.report_id.clone(),
            role_id: m.role_id,
        })
        .collect()
}

fn build_quotation_rows(quotations: &[Quotation]) -> Vec<QuotationRow> {
    quotations
        .iter()
        .map(|q| QuotationRow {
            id: q.id,
            number: q.quotation_number.clone(),
            customer: q.customer_name.clone(),
            total: format!("{} {}", format_amount(q.total_amount), q.currency),
            status: q.status.to_string(),
            valid_until: q
                .valid_until
                .map(|d| d.to_string())
                .unwrap_or_default(),
        })
        .collect()
}

fn build_price_rule_rows(rules: &[PriceRule]) -> Vec<PriceRuleRow> {
    rules
        .iter()
        .map(|r| PriceRuleRow {
            id: r.id,
            name: r.name.clone(),
            product: r.product_code.clone().unwrap_or_else(|| "*".to_string()),
            discount: format!("{}%", r.discount_percent),
            min_quantity: r.min_quantity,
            active: format_flag(r.is_active),
        })
        .collect()
}

// -- Printing --

pub fn print_users(users: &[User], format: &OutputFormat) -> Result<()> {
    print_rows(users, build_user_rows(users), format)
}

pub fn print_approval_roles(roles: &[ApprovalRole], format: &OutputFormat) -> Result<()> {
    print_rows(roles, build_approval_role_rows(roles), format)
}

pub fn print_role_groups(groups: &[ApprovalRoleGroup], format: &OutputFormat) -> Result<()> {
    print_rows(groups, build_role_group_rows(groups), format)
}

pub fn print_report_mappings(
    mappings: &[PowerBiReportRoleMapping],
    format: &OutputFormat,
) -> Result<()> {
    print_rows(mappings, build_report_mapping_rows(mappings), format)
}

pub fn print_quotations(quotations: &[Quotation], format: &OutputFormat) -> Result<()> {
    print_rows(quotations, build_quotation_rows(quotations), format)
}

pub fn print_price_rules(rules: &[PriceRule], format: &OutputFormat) -> Result<()> {
    print_rows(rules, build_price_rule_rows(rules), format)
}

/// JSON output carries the full records; table and CSV use the row shapes.
fn print_rows<E: Serialize, R: Tabled + Serialize>(
    records: &[E],
    rows: Vec<R>,
    format: &OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Table => {
            println!("{}", Table::new(rows));
        }
        OutputFormat::Json => print_json(&records),
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(std::io::stdout());
            for row in rows {
                wtr.serialize(row)?;
            }
            wtr.flush()?;
        }
    }
    Ok(())
}

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

fn format_flag(flag: bool) -> String {
    if flag { "yes" } else { "no" }.to_string()
}

fn format_amount(value: f64) -> String {
    format!("{:.2}", value)
}
