//! # リード
//!
//! Web サイトの問い合わせフォームから送信される見込み客情報。
//!
//! ## ドメイン用語
//!
//! | 型 | ドメイン用語 | 制約 |
//! |---|------------|------|
//! | [`LeadName`] | 氏名 | 2〜120 文字 |
//! | [`Email`] | メールアドレス | メールアドレス形式 |
//! | [`Budget`] | 予算（任意） | 120 文字以内 |
//! | [`LeadDescription`] | 相談内容 | 10〜5000 文字 |
//!
//! リードは送信ごとに作成され、一度だけ永続化される。更新・削除は行わない。
//! 同一内容の送信でも重複排除はしない。

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::DomainError;

define_uuid_id! {
    /// リード ID
    ///
    /// ドキュメントストアが採番した ID をそのまま使う。
    pub struct LeadId;
}

define_length_checked_string! {
    /// 氏名
    pub struct LeadName {
        field: "name",
        label: "名前",
        min: 2,
        max: 120,
    }
}

define_length_checked_string! {
    /// 予算（自由記述）
    pub struct Budget {
        field: "budget",
        label: "予算",
        min: 0,
        max: 120,
    }
}

define_length_checked_string! {
    /// 相談内容
    pub struct LeadDescription {
        field: "description",
        label: "相談内容",
        min: 10,
        max: 5000,
    }
}

/// メールアドレスの最大長（RFC 5321 の Forward-path 制限）
const EMAIL_MAX_LENGTH: usize = 254;

/// ローカル部の最大長
const EMAIL_LOCAL_MAX_LENGTH: usize = 64;

static EMAIL_LOCAL_PART: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*$")
        .expect("ローカル部の正規表現が不正です")
});

static EMAIL_DOMAIN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?\.)+[A-Za-z](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?$",
    )
    .expect("ドメイン部の正規表現が不正です")
});

/// メールアドレス
///
/// # バリデーション
///
/// - `local@domain` の形式で `@` はちょうど 1 つ
/// - ローカル部は dot-atom 形式（先頭・末尾・連続のドットを許可しない）
/// - ドメイン部はドットで区切られた 2 ラベル以上、TLD は英字始まり
/// - 全体で 254 文字以内、ローカル部は 64 文字以内
///
/// ```
/// use nova_domain::lead::Email;
///
/// assert!(Email::new("jane@example.com").is_ok());
/// assert!(Email::new("not-an-email").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        let invalid = || DomainError::validation("email", "メールアドレスの形式が不正です");

        if value.len() > EMAIL_MAX_LENGTH {
            return Err(DomainError::validation(
                "email",
                format!("メールアドレスは {EMAIL_MAX_LENGTH} 文字以内である必要があります"),
            ));
        }

        let Some((local, domain)) = value.split_once('@') else {
            return Err(invalid());
        };

        if local.len() > EMAIL_LOCAL_MAX_LENGTH
            || !EMAIL_LOCAL_PART.is_match(local)
            || !EMAIL_DOMAIN.is_match(domain)
        {
            return Err(invalid());
        }

        Ok(Self(value))
    }

    /// 文字列参照を取得する
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// 未検証のリード入力
///
/// HTTP リクエストボディから組み立て、[`Lead::new`] で検証する。
#[derive(Debug, Clone, Default)]
pub struct LeadInput {
    pub name:        String,
    pub email:       String,
    pub budget:      Option<String>,
    pub description: String,
}

/// 検証済みのリード
///
/// `Serialize` の出力がそのままドキュメントストアに保存される。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Lead {
    name:        LeadName,
    email:       Email,
    budget:      Option<Budget>,
    description: LeadDescription,
}

impl Lead {
    /// 入力を検証してリードを作成する
    ///
    /// `name` → `email` → `budget` → `description` の順に検証し、
    /// 最初に見つかった違反を返す。
    pub fn new(input: LeadInput) -> Result<Self, DomainError> {
        Ok(Self {
            name:        LeadName::new(input.name)?,
            email:       Email::new(input.email)?,
            budget:      input.budget.map(Budget::new).transpose()?,
            description: LeadDescription::new(input.description)?,
        })
    }

    pub fn name(&self) -> &LeadName {
        &self.name
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn budget(&self) -> Option<&Budget> {
        self.budget.as_ref()
    }

    pub fn description(&self) -> &LeadDescription {
        &self.description
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn valid_input() -> LeadInput {
        LeadInput {
            name:        "Jane Doe".to_string(),
            email:       "jane@example.com".to_string(),
            budget:      None,
            description: "Interested in automation services for support.".to_string(),
        }
    }

    #[test]
    fn test_正しい入力でリードを作成できる() {
        let lead = Lead::new(valid_input()).unwrap();

        assert_eq!(lead.name().as_str(), "Jane Doe");
        assert_eq!(lead.email().as_str(), "jane@example.com");
        assert_eq!(lead.budget(), None);
    }

    #[rstest]
    #[case("")]
    #[case("J")]
    fn test_名前が2文字未満ならnameのエラー(#[case] name: &str) {
        let input = LeadInput {
            name: name.to_string(),
            ..valid_input()
        };

        let err = Lead::new(input).unwrap_err();
        assert_eq!(err.field(), "name");
    }

    #[test]
    fn test_名前は120文字まで許可し121文字で拒否する() {
        assert!(LeadName::new("a".repeat(120)).is_ok());
        assert!(LeadName::new("a".repeat(121)).is_err());
    }

    #[test]
    fn test_文字数はバイト数ではなく文字数で数える() {
        // 2 文字だが 6 バイト
        assert!(LeadName::new("山田").is_ok());
        assert!(LeadName::new("山".repeat(120)).is_ok());
    }

    #[rstest]
    #[case("jane@example.com")]
    #[case("jane.doe+sales@mail.example.co.uk")]
    #[case("o'neil@example.org")]
    fn test_有効なメールアドレスを受け付ける(#[case] email: &str) {
        assert!(Email::new(email).is_ok());
    }

    #[rstest]
    #[case("")]
    #[case("not-an-email")]
    #[case("@example.com")]
    #[case("jane@")]
    #[case("jane@localhost")]
    #[case("jane@@example.com")]
    #[case(".jane@example.com")]
    #[case("jane..doe@example.com")]
    #[case("jane doe@example.com")]
    #[case("jane@-example.com")]
    #[case("jane@example.123")]
    fn test_不正なメールアドレスはemailのエラー(#[case] email: &str) {
        let input = LeadInput {
            email: email.to_string(),
            ..valid_input()
        };

        let err = Lead::new(input).unwrap_err();
        assert_eq!(err.field(), "email");
    }

    #[test]
    fn test_長すぎるメールアドレスを拒否する() {
        let email = format!("{}@example.com", "a".repeat(250));
        assert!(Email::new(email).is_err());
    }

    #[test]
    fn test_予算は任意で空文字も許可する() {
        let input = LeadInput {
            budget: Some(String::new()),
            ..valid_input()
        };

        let lead = Lead::new(input).unwrap();
        assert_eq!(lead.budget().map(Budget::as_str), Some(""));
    }

    #[test]
    fn test_予算が120文字を超えるとbudgetのエラー() {
        let input = LeadInput {
            budget: Some("$".repeat(121)),
            ..valid_input()
        };

        let err = Lead::new(input).unwrap_err();
        assert_eq!(err.field(), "budget");
    }

    #[rstest]
    #[case("too short".to_string())]
    #[case("x".repeat(5001))]
    fn test_相談内容の文字数違反はdescriptionのエラー(#[case] description: String) {
        let input = LeadInput {
            description,
            ..valid_input()
        };

        let err = Lead::new(input).unwrap_err();
        assert_eq!(err.field(), "description");
    }

    #[test]
    fn test_複数の違反がある場合はnameを先に報告する() {
        let input = LeadInput {
            name:        "J".to_string(),
            email:       "broken".to_string(),
            budget:      None,
            description: "short".to_string(),
        };

        assert_eq!(Lead::new(input).unwrap_err().field(), "name");
    }

    #[test]
    fn test_serializeでフラットなjsonになる() {
        let lead = Lead::new(LeadInput {
            budget: Some("$5k-$10k".to_string()),
            ..valid_input()
        })
        .unwrap();

        assert_eq!(
            serde_json::to_value(&lead).unwrap(),
            serde_json::json!({
                "name": "Jane Doe",
                "email": "jane@example.com",
                "budget": "$5k-$10k",
                "description": "Interested in automation services for support."
            })
        );
    }

    #[test]
    fn test_lead_idは毎回異なる値を生成する() {
        assert_ne!(LeadId::new(), LeadId::new());
    }
}
