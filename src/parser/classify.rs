//! 利用記録の分類モジュール

/// 利用記録の種別
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// バス利用（記録に「バス」を含む）
    Bus,
    /// 駅間移動（入場・出場マーカーを含む）
    Transit,
    /// その他（チャージ等。通常は対象外）
    Other,
}

/// 分類結果
#[derive(Debug, Clone)]
pub struct Classification {
    pub kind: Kind,
    /// 入場マーカーの次のトークン（起点駅）
    pub from_station: Option<String>,
    /// 「出」の次のトークン（終点駅）
    pub to_station: Option<String>,
    /// 記録に含まれていたバス事業者名（対象リスト中で最初に一致したもの）
    pub matched_company: Option<String>,
}

impl Classification {
    fn new(kind: Kind) -> Self {
        Self {
            kind,
            from_station: None,
            to_station: None,
            matched_company: None,
        }
    }
}

/// 入場マーカーかどうか
/// モバイルSuicaの履歴では改札入場が「入」または「＊入」と表記される
fn is_entry_marker(token: &str) -> bool {
    token == "入" || token == "＊入"
}

/// 利用記録テキストを分類する
///
/// 判定順:
/// 1. 「バス」を含む → Bus。対象リスト中のバス事業者名で記録に含まれる
///    最初のものを matched_company に記録
/// 2. 入場マーカーと「出」の両方をトークンとして含む → Transit。
///    空白区切りトークン列から起点駅・終点駅を抽出
/// 3. それ以外 → Other
pub fn classify(record: &str, stations: &[String]) -> Classification {
    if record.contains("バス") {
        let mut classification = Classification::new(Kind::Bus);
        classification.matched_company = stations
            .iter()
            .filter(|s| s.contains("バス"))
            .find(|s| record.contains(s.as_str()))
            .cloned();
        return classification;
    }

    let tokens: Vec<&str> = record.split_whitespace().collect();
    let has_entry = tokens.iter().any(|t| is_entry_marker(t));
    let has_exit = tokens.iter().any(|t| *t == "出");

    if has_entry && has_exit {
        let mut classification = Classification::new(Kind::Transit);
        for (i, token) in tokens.iter().enumerate() {
            if is_entry_marker(token) {
                classification.from_station = tokens.get(i + 1).map(|t| t.to_string());
            } else if *token == "出" {
                classification.to_station = tokens.get(i + 1).map(|t| t.to_string());
            }
        }
        return classification;
    }

    Classification::new(Kind::Other)
}
