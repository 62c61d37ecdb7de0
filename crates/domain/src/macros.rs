/// UUID v7 ベースの ID 型を定義する宣言型マクロ
///
/// 以下のボイラープレートを一括生成する:
/// - Newtype 構造体（`Uuid` をラップ）
/// - `derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display)`
/// - `new()`: UUID v7 を生成
/// - `from_uuid()`: 既存 UUID から復元
/// - `as_uuid()`: 内部 UUID への参照
/// - `Default` impl（`new()` に委譲）
macro_rules! define_uuid_id {
    (
        $(#[$meta:meta])*
        $vis:vis struct $Name:ident;
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, PartialEq, Eq, Hash,
            serde::Serialize, serde::Deserialize,
            derive_more::Display,
        )]
        #[display("{_0}")]
        $vis struct $Name(uuid::Uuid);

        impl $Name {
            /// 新しい ID を生成する（UUID v7）
            pub fn new() -> Self {
                Self(uuid::Uuid::now_v7())
            }

            /// 既存の UUID から ID を作成する
            pub fn from_uuid(uuid: uuid::Uuid) -> Self {
                Self(uuid)
            }

            /// 内部の UUID 参照を取得する
            pub fn as_uuid(&self) -> &uuid::Uuid {
                &self.0
            }
        }

        impl Default for $Name {
            fn default() -> Self {
                Self::new()
            }
        }
    };
}

/// 文字数制約付き String Newtype を定義する宣言型マクロ
///
/// 文字数は `chars().count()`（Unicode スカラー値の数）で数える。
/// 値はトリムせずにそのまま保持する。
///
/// ```rust,ignore
/// define_length_checked_string! {
///     /// リード名
///     pub struct LeadName {
///         field: "name",
///         label: "名前",
///         min: 2,
///         max: 120,
///     }
/// }
/// ```
macro_rules! define_length_checked_string {
    (
        $(#[$meta:meta])*
        $vis:vis struct $Name:ident {
            field: $field:literal,
            label: $label:literal,
            min: $min:expr,
            max: $max:expr $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
        #[serde(transparent)]
        $vis struct $Name(String);

        impl $Name {
            /// 最小文字数
            pub const MIN_CHARS: usize = $min;
            /// 最大文字数
            pub const MAX_CHARS: usize = $max;

            /// 文字数を検証して作成する
            pub fn new(value: impl Into<String>) -> Result<Self, $crate::DomainError> {
                let value = value.into();
                $crate::macros::check_char_count(
                    $field,
                    $label,
                    &value,
                    Self::MIN_CHARS,
                    Self::MAX_CHARS,
                )?;
                Ok(Self(value))
            }

            /// 文字列参照を取得する
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// 所有権を持つ文字列に変換する
            pub fn into_string(self) -> String {
                self.0
            }
        }

        impl std::fmt::Display for $Name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

/// 文字数が `min..=max` に収まっているか検証する
pub(crate) fn check_char_count(
    field: &'static str,
    label: &str,
    value: &str,
    min: usize,
    max: usize,
) -> Result<(), crate::DomainError> {
    let count = value.chars().count();

    if count < min {
        return Err(crate::DomainError::validation(
            field,
            format!("{label}は {min} 文字以上である必要があります"),
        ));
    }

    if count > max {
        return Err(crate::DomainError::validation(
            field,
            format!("{label}は {max} 文字以内である必要があります"),
        ));
    }

    Ok(())
}
