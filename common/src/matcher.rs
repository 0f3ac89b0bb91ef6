//! マッチャー
//!
//! 1カテゴリ分のルール列を1テキストに適用し、ヒットを列挙する。

use crate::rules::PatternRule;

/// 1件のヒット
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchHit {
    /// ヒットしたルールのインデックス（カテゴリ内）
    pub pattern_index: usize,
    /// ヒット文字列
    pub text: String,
}

/// 全ルールのヒットを列挙する
///
/// - ルールごとに左から重なりなく全件を探索し、ルール順に連結する
/// - キャプチャグループを持つルールは、全グループを連結した文字列を報告する
/// - 空文字・空白のみのテキストはルールを評価せず空を返す
/// - 空文字にマッチしうるルールでは、直前のヒットの終端位置の空マッチは報告しない
pub fn find_all(rules: &[PatternRule], text: &str) -> Vec<MatchHit> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    let mut hits = Vec::new();

    for (pattern_index, rule) in rules.iter().enumerate() {
        let regex = rule.regex();

        if rule.group_count() == 0 {
            hits.extend(regex.find_iter(text).map(|m| MatchHit {
                pattern_index,
                text: m.as_str().to_string(),
            }));
        } else {
            for caps in regex.captures_iter(text) {
                // 不参加のグループは空文字として扱う
                let joined: String = caps
                    .iter()
                    .skip(1)
                    .map(|g| g.map(|m| m.as_str()).unwrap_or(""))
                    .collect();
                hits.push(MatchHit {
                    pattern_index,
                    text: joined,
                });
            }
        }
    }

    hits
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::Category;
    use crate::rules::RuleStore;

    fn rules(sources: &[&str]) -> Vec<PatternRule> {
        sources.iter().map(|s| PatternRule::new(s).unwrap()).collect()
    }

    fn texts(hits: &[MatchHit]) -> Vec<&str> {
        hits.iter().map(|h| h.text.as_str()).collect()
    }

    #[test]
    fn test_find_all_multiplicity() {
        let store = RuleStore::builtin();
        let hits = find_all(store.rules(Category::Polite), "そうです。行きます！");
        assert_eq!(texts(&hits), vec!["です。", "ます！"]);
        assert!(hits.iter().all(|h| h.pattern_index == 0));
    }

    #[test]
    fn test_find_all_rule_order() {
        let rules = rules(&["ます", "です"]);
        let hits = find_all(&rules, "ですます");
        // 出現位置ではなくルール順
        assert_eq!(texts(&hits), vec!["ます", "です"]);
        assert_eq!(hits[0].pattern_index, 0);
        assert_eq!(hits[1].pattern_index, 1);
    }

    #[test]
    fn test_find_all_blank_text() {
        let store = RuleStore::builtin();
        assert!(find_all(store.rules(Category::Polite), "").is_empty());
        assert!(find_all(store.rules(Category::Polite), "   ").is_empty());
        assert!(find_all(store.rules(Category::Polite), "\u{3000}\n").is_empty());
    }

    #[test]
    fn test_find_all_capture_groups_concatenated() {
        let rules = rules(&[r"(お)[一-龥]+(します)"]);
        let hits = find_all(&rules, "お電話します。");
        assert_eq!(texts(&hits), vec!["おします"]);
    }

    #[test]
    fn test_find_all_single_group() {
        let rules = rules(&[r"(ご覧)になる"]);
        let hits = find_all(&rules, "ご覧になる");
        assert_eq!(texts(&hits), vec!["ご覧"]);
    }

    #[test]
    fn test_find_all_unmatched_group_is_empty() {
        let rules = rules(&[r"(伺)(?:います|(わせて))"]);
        let hits = find_all(&rules, "伺います");
        assert_eq!(texts(&hits), vec!["伺"]);
    }

    #[test]
    fn test_polite_tail_absorbs_decoration() {
        let store = RuleStore::builtin();
        let hits = find_all(store.rules(Category::Polite), "いいですねー笑 」");
        assert_eq!(texts(&hits), vec!["ですねー笑 」"]);
    }

    #[test]
    fn test_beautifier_pattern() {
        let store = RuleStore::builtin();
        let hits = find_all(store.rules(Category::Beautifying), "お電話します");
        assert_eq!(texts(&hits), vec!["お電話します"]);
    }

    #[test]
    fn test_zero_width_matches() {
        // 直前のヒット終端での空マッチは数えない
        let rules = rules(&["ね*"]);
        let hits = find_all(&rules, "ねa");
        assert_eq!(texts(&hits), vec!["ね", ""]);
    }

    #[test]
    fn test_no_hits() {
        let store = RuleStore::builtin();
        for (_, rules) in store.categories() {
            assert!(find_all(rules, "今日は天気がいいね").is_empty());
        }
    }
}
