use super::*;

#[test]
fn thousands_grouping() {
    assert_eq!(group_thousands(0), "0");
    assert_eq!(group_thousands(999), "999");
    assert_eq!(group_thousands(1000), "1,000");
    assert_eq!(group_thousands(742_819), "742,819");
    assert_eq!(group_thousands(-1_234_567), "-1,234,567");
}

#[test]
fn kpi_formats() {
    assert_eq!(format_kpi(742_819.0, KpiFormat::Currency), "$742,819");
    assert_eq!(format_kpi(-1200.0, KpiFormat::Currency), "-$1,200");
    assert_eq!(format_kpi(18_204.0, KpiFormat::Integer), "18,204");
    assert_eq!(format_kpi(94.0, KpiFormat::Percent), "94%");
}

#[test]
fn extreme_values_saturate_without_overflow() {
    assert_eq!(
        format_kpi(-1.0e19, KpiFormat::Currency),
        "-$9,223,372,036,854,775,808"
    );
    assert_eq!(
        format_kpi(1.0e19, KpiFormat::Currency),
        "$9,223,372,036,854,775,807"
    );
    assert_eq!(group_thousands(i64::MIN), "-9,223,372,036,854,775,808");
    assert_eq!(format_kpi(-1.0e19, KpiFormat::Percent), "-9,223,372,036,854,775,808%");
}

#[test]
fn signed_percent_has_explicit_sign() {
    assert_eq!(format_signed_percent(0.124), "+12.4%");
    assert_eq!(format_signed_percent(-0.1), "-10.0%");
    assert_eq!(format_signed_percent(-0.0001), "+0.0%");
}

#[test]
fn compact_currency_suffixes() {
    assert_eq!(format_compact_currency(950.0), "$950");
    assert_eq!(format_compact_currency(310_000.0), "$310K");
    assert_eq!(format_compact_currency(2_100_000.0), "$2.1M");
    assert_eq!(format_compact_currency(2_000_000.0), "$2M");
    assert_eq!(format_compact_currency(1_400_000_000.0), "$1.4B");
}
