#[cfg(all(feature = "ja", feature = "en"))]
compile_error!("Cannot enable both 'ja' and 'en' features at the same time");

#[cfg(feature = "ja")]
pub mod strings {
    pub const SETTLEMENT: &str = "精算";
    pub const ITEM: &str = "項目";
    pub const AMOUNT: &str = "金額";
    pub const MEMBER: &str = "メンバー";
    pub const ROLE: &str = "役割";
    pub const CUT: &str = "配分";
    pub const PAYOUT: &str = "支払額";
    pub const BASIS: &str = "根拠";
    pub const TOTAL_INCOME: &str = "総収入";
    pub const TOTAL_EXPENSES: &str = "総支出";
    pub const MANAGER_FEE: &str = "マネージャー手数料";
    pub const AGENT_FEE: &str = "エージェント手数料";
    pub const NET_AFTER_FEES: &str = "手数料・経費控除後";
    pub const SAVINGS: &str = "積立";
    pub const DISTRIBUTABLE: &str = "分配可能額";
    pub const UNALLOCATED: &str = "端数";
    pub const CATEGORY: &str = "カテゴリ";
    pub const INCOME: &str = "収入";
    pub const EXPENSE: &str = "支出";
    pub const EXPLICIT_CUT: &str = "指定";
    pub const EQUAL_SHARE: &str = "均等";
    pub const ROLE_OWNER: &str = "オーナー";
    pub const ROLE_MANAGER: &str = "マネージャー";
    pub const ROLE_MEMBER: &str = "メンバー";
    pub const NO_PARTICIPANTS: &str = "精算に参加するメンバーがいません。";
    pub const VALUE_REQUIRED: &str = "値を入力してください";
}

#[cfg(feature = "en")]
pub mod strings {
    pub const SETTLEMENT: &str = "Settlement";
    pub const ITEM: &str = "Item";
    pub const AMOUNT: &str = "Amount";
    pub const MEMBER: &str = "Member";
    pub const ROLE: &str = "Role";
    pub const CUT: &str = "Cut";
    pub const PAYOUT: &str = "Payout";
    pub const BASIS: &str = "Basis";
    pub const TOTAL_INCOME: &str = "Total income";
    pub const TOTAL_EXPENSES: &str = "Total expenses";
    pub const MANAGER_FEE: &str = "Manager fee";
    pub const AGENT_FEE: &str = "Agent fee";
    pub const NET_AFTER_FEES: &str = "Net after fees and expenses";
    pub const SAVINGS: &str = "Savings";
    pub const DISTRIBUTABLE: &str = "Distributable";
    pub const UNALLOCATED: &str = "Rounding remainder";
    pub const CATEGORY: &str = "Category";
    pub const INCOME: &str = "Income";
    pub const EXPENSE: &str = "Expense";
    pub const EXPLICIT_CUT: &str = "Explicit";
    pub const EQUAL_SHARE: &str = "Equal share";
    pub const ROLE_OWNER: &str = "Owner";
    pub const ROLE_MANAGER: &str = "Manager";
    pub const ROLE_MEMBER: &str = "Member";
    pub const NO_PARTICIPANTS: &str = "No members take part in this settlement.";
    pub const VALUE_REQUIRED: &str = "A value is required";
}

#[cfg(not(any(feature = "ja", feature = "en")))]
pub mod strings {
    pub const SETTLEMENT: &str = "Settlement";
    pub const ITEM: &str = "Item";
    pub const AMOUNT: &str = "Amount";
    pub const MEMBER: &str = "Member";
    pub const ROLE: &str = "Role";
    pub const CUT: &str = "Cut";
    pub const PAYOUT: &str = "Payout";
    pub const BASIS: &str = "Basis";
    pub const TOTAL_INCOME: &str = "Total income";
    pub const TOTAL_EXPENSES: &str = "Total expenses";
    pub const MANAGER_FEE: &str = "Manager fee";
    pub const AGENT_FEE: &str = "Agent fee";
    pub const NET_AFTER_FEES: &str = "Net after fees and expenses";
    pub const SAVINGS: &str = "Savings";
    pub const DISTRIBUTABLE: &str = "Distributable";
    pub const UNALLOCATED: &str = "Rounding remainder";
    pub const CATEGORY: &str = "Category";
    pub const INCOME: &str = "Income";
    pub const EXPENSE: &str = "Expense";
    pub const EXPLICIT_CUT: &str = "Explicit";
    pub const EQUAL_SHARE: &str = "Equal share";
    pub const ROLE_OWNER: &str = "Owner";
    pub const ROLE_MANAGER: &str = "Manager";
    pub const ROLE_MEMBER: &str = "Member";
    pub const NO_PARTICIPANTS: &str = "No members take part in this settlement.";
    pub const VALUE_REQUIRED: &str = "A value is required";
}

#[cfg(feature = "ja")]
pub mod messages {
    use std::fmt::Display;

    pub fn not_a_number(field: impl Display, input: impl Display) -> String {
        format!("{field}: '{input}' は数値ではありません")
    }

    pub fn percent_out_of_range(field: impl Display, value: impl Display) -> String {
        format!("{field}: {value}% は 0〜100 の範囲外です")
    }

    pub fn too_many_decimals(field: impl Display, input: impl Display) -> String {
        format!("{field}: '{input}' は小数点以下2桁までです")
    }

    pub fn negative_amount(field: impl Display, input: impl Display) -> String {
        format!("{field}: '{input}' は負の金額です")
    }

    pub fn amount_too_large(field: impl Display, input: impl Display) -> String {
        format!("{field}: '{input}' は扱える金額を超えています")
    }

    pub fn cuts_not_whole(total: impl Display) -> String {
        format!("配分の合計が {total}% です。100.00% にしてください")
    }

    pub fn unknown_member(member: impl Display) -> String {
        format!("メンバー {member} はこのツアーの精算に参加していません")
    }

    pub fn duplicate_cut(member: impl Display) -> String {
        format!("メンバー {member} の配分が重複しています")
    }

    pub fn missing_cut(member: impl Display) -> String {
        format!("メンバー {member} の配分がありません")
    }

    pub fn store_failure(detail: impl Display) -> String {
        format!("データの取得に失敗しました: {detail}")
    }

    pub fn tour_not_found(tour: impl Display) -> String {
        format!("ツアー {tour} が見つかりません")
    }
}

#[cfg(feature = "en")]
pub mod messages {
    use std::fmt::Display;

    pub fn not_a_number(field: impl Display, input: impl Display) -> String {
        format!("{field}: '{input}' is not a number")
    }

    pub fn percent_out_of_range(field: impl Display, value: impl Display) -> String {
        format!("{field}: {value}% is outside 0 to 100")
    }

    pub fn too_many_decimals(field: impl Display, input: impl Display) -> String {
        format!("{field}: '{input}' has more than two decimal places")
    }

    pub fn negative_amount(field: impl Display, input: impl Display) -> String {
        format!("{field}: '{input}' is a negative amount")
    }

    pub fn amount_too_large(field: impl Display, input: impl Display) -> String {
        format!("{field}: '{input}' is too large")
    }

    pub fn cuts_not_whole(total: impl Display) -> String {
        format!("Cuts add up to {total}%; they must total 100.00%")
    }

    pub fn unknown_member(member: impl Display) -> String {
        format!("Member {member} does not take part in this tour's settlement")
    }

    pub fn duplicate_cut(member: impl Display) -> String {
        format!("Member {member} has more than one cut")
    }

    pub fn missing_cut(member: impl Display) -> String {
        format!("Member {member} has no cut")
    }

    pub fn store_failure(detail: impl Display) -> String {
        format!("Could not load settlement data: {detail}")
    }

    pub fn tour_not_found(tour: impl Display) -> String {
        format!("Tour {tour} was not found")
    }
}

#[cfg(not(any(feature = "ja", feature = "en")))]
pub mod messages {
    use std::fmt::Display;

    pub fn not_a_number(field: impl Display, input: impl Display) -> String {
        format!("{field}: '{input}' is not a number")
    }

    pub fn percent_out_of_range(field: impl Display, value: impl Display) -> String {
        format!("{field}: {value}% is outside 0 to 100")
    }

    pub fn too_many_decimals(field: impl Display, input: impl Display) -> String {
        format!("{field}: '{input}' has more than two decimal places")
    }

    pub fn negative_amount(field: impl Display, input: impl Display) -> String {
        format!("{field}: '{input}' is a negative amount")
    }

    pub fn amount_too_large(field: impl Display, input: impl Display) -> String {
        format!("{field}: '{input}' is too large")
    }

    pub fn cuts_not_whole(total: impl Display) -> String {
        format!("Cuts add up to {total}%; they must total 100.00%")
    }

    pub fn unknown_member(member: impl Display) -> String {
        format!("Member {member} does not take part in this tour's settlement")
    }

    pub fn duplicate_cut(member: impl Display) -> String {
        format!("Member {member} has more than one cut")
    }

    pub fn missing_cut(member: impl Display) -> String {
        format!("Member {member} has no cut")
    }

    pub fn store_failure(detail: impl Display) -> String {
        format!("Could not load settlement data: {detail}")
    }

    pub fn tour_not_found(tour: impl Display) -> String {
        format!("Tour {tour} was not found")
    }
}

pub use messages::*;
pub use strings::*;
