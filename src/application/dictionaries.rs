use once_cell::sync::Lazy;
use serde_json::Value;

use crate::application::language::UserLanguage;

static RAW_KO: &str = include_str!("../../dictionaries/ko.json");
static RAW_EN: &str = include_str!("../../dictionaries/en.json");

static DICT_KO: Lazy<Value> =
    Lazy::new(|| serde_json::from_str(RAW_KO).expect("failed to parse ko dictionary json"));
static DICT_EN: Lazy<Value> =
    Lazy::new(|| serde_json::from_str(RAW_EN).expect("failed to parse en dictionary json"));

/// Looks up a dotted path such as `waitlist.submitted`. Unknown paths come back verbatim.
pub fn t(lang: UserLanguage, path: &str) -> String {
    let dict = match lang {
        UserLanguage::Ko => &*DICT_KO,
        UserLanguage::En => &*DICT_EN,
    };
    let mut cursor = dict;
    for segment in path.split('.') {
        if let Some(v) = cursor.get(segment) {
            cursor = v;
        } else {
            return path.to_string();
        }
    }
    cursor
        .as_str()
        .map(str::to_string)
        .unwrap_or_else(|| path.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn korean_waitlist_copy() {
        let ko = UserLanguage::Ko;
        assert_eq!(t(ko, "waitlist.invalidEmail"), "유효한 이메일 주소를 입력해주세요.");
        assert_eq!(t(ko, "waitlist.submitted"), "출시 알림 신청이 완료되었습니다!");
        assert_eq!(
            t(ko, "waitlist.failed"),
            "신청 중 오류가 발생했습니다. 다시 시도해주세요."
        );
    }

    #[test]
    fn missing_path_returns_path() {
        assert_eq!(t(UserLanguage::En, "waitlist.nope"), "waitlist.nope");
        // a branch, not a leaf
        assert_eq!(t(UserLanguage::En, "waitlist"), "waitlist");
    }

    #[test]
    fn dictionaries_share_keys() {
        let ko = &*DICT_KO;
        let en = &*DICT_EN;
        let keys = |v: &Value| {
            let mut k: Vec<String> = v["waitlist"]
                .as_object()
                .unwrap()
                .keys()
                .cloned()
                .collect();
            k.sort();
            k
        };
        assert_eq!(keys(ko), keys(en));
    }
}
