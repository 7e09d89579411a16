//! Golden-value integration tests for the star tables and hidden stems.
//!
//! Cases come from worked charts for 1983-08-11, 1984-12-02 and 2018-03-21.

use sanmei_base::{
    ALL_BRANCHES, ALL_STEMS, Branch, RuleTenStars, Stem, TableTenStars, TenStar, TenStarSource,
    TwelveStar, resolve_hidden_stem, ten_star, twelve_star, validate_tables,
};

// ---------------------------------------------------------------------------
// Ten stars
// ---------------------------------------------------------------------------

#[test]
fn chart_1984_12_02_ten_stars() {
    // day 庚; year 甲, month 乙, hidden: 子→癸, 亥→壬
    assert_eq!(ten_star(Stem::Geng, Stem::Jia), TenStar::Rokuzon);
    assert_eq!(ten_star(Stem::Geng, Stem::Ren), TenStar::Hokaku);
    assert_eq!(ten_star(Stem::Geng, Stem::Yi), TenStar::Shiroku);
    assert_eq!(ten_star(Stem::Geng, Stem::Gui), TenStar::Chojo);
}

#[test]
fn chart_2018_03_21_ten_stars() {
    // day 壬; year 戊, month 乙, hidden: 戌→戊, 卯→乙
    assert_eq!(ten_star(Stem::Ren, Stem::Wu), TenStar::Shaki);
    assert_eq!(ten_star(Stem::Ren, Stem::Yi), TenStar::Chojo);
}

#[test]
fn sources_are_interchangeable() {
    let sources: [&dyn TenStarSource; 2] = [&RuleTenStars, &TableTenStars::default()];
    for source in sources {
        validate_tables(source).unwrap();
        assert_eq!(source.ten_star(Stem::Geng, Stem::Jia), TenStar::Rokuzon);
    }
}

// ---------------------------------------------------------------------------
// Twelve stars
// ---------------------------------------------------------------------------

#[test]
fn chart_1983_08_11_twelve_stars() {
    assert_eq!(twelve_star(Stem::Xin, Branch::Hai), TwelveStar::Bathing);
    assert_eq!(twelve_star(Stem::Xin, Branch::Shen), TwelveStar::Emperor);
    assert_eq!(twelve_star(Stem::Xin, Branch::Wei), TwelveStar::Decline);
    let total: u32 = [Branch::Hai, Branch::Shen, Branch::Wei]
        .iter()
        .map(|b| u32::from(twelve_star(Stem::Xin, *b).score()))
        .sum();
    assert_eq!(total, 27);
}

#[test]
fn each_stem_has_one_emperor_branch() {
    for stem in ALL_STEMS {
        let emperors = ALL_BRANCHES
            .iter()
            .filter(|b| twelve_star(stem, **b) == TwelveStar::Emperor)
            .count();
        assert_eq!(emperors, 1, "stem {stem}");
    }
}

// ---------------------------------------------------------------------------
// Hidden stems
// ---------------------------------------------------------------------------

#[test]
fn chart_1984_12_02_hidden_stems() {
    // 24 days after 立冬
    assert_eq!(resolve_hidden_stem(Branch::Zi, 24), Stem::Gui);
    assert_eq!(resolve_hidden_stem(Branch::Hai, 24), Stem::Ren);
    assert_eq!(resolve_hidden_stem(Branch::Wu, 24), Stem::Ding);
}

#[test]
fn chart_1983_08_11_hidden_stems() {
    // a few days after 立秋
    for elapsed in 2..=3 {
        assert_eq!(resolve_hidden_stem(Branch::Shen, elapsed), Stem::Wu);
        assert_eq!(resolve_hidden_stem(Branch::Hai, elapsed), Stem::Jia);
        assert_eq!(resolve_hidden_stem(Branch::Wei, elapsed), Stem::Ding);
    }
}
