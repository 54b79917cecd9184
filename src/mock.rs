//! Built-in sample schedule for July, used when no CSV is configured.

use crate::parser::ScheduleEntry;

pub fn mock_entries() -> Vec<ScheduleEntry> {
    vec![
        ScheduleEntry::new("7/1", "プロジェクトA", "田中太郎", &["佐藤花子", "山田次郎"]),
        ScheduleEntry::new("7/2", "イベントB", "田中太郎", &["佐藤花子", "鈴木一郎"]),
        ScheduleEntry::new("7/3", "ワークショップC", "山田次郎", &["鈴木一郎", "高橋美智子"]),
        ScheduleEntry::new("7/5", "セミナーD", "佐藤花子", &["田中太郎", "山田次郎", "高橋美智子"]),
        ScheduleEntry::new("7/8", "プロジェクトE", "鈴木一郎", &["佐藤花子", "高橋美智子"]),
        ScheduleEntry::new("7/10", "イベントF", "田中太郎", &["山田次郎", "鈴木一郎"]),
        ScheduleEntry::new("7/12", "ワークショップG", "高橋美智子", &["田中太郎", "佐藤花子"]),
        ScheduleEntry::new("7/15", "セミナーH", "山田次郎", &["鈴木一郎", "高橋美智子"]),
        ScheduleEntry::new("7/18", "プロジェクトI", "佐藤花子", &["田中太郎", "山田次郎"]),
        ScheduleEntry::new("7/20", "イベントJ", "鈴木一郎", &["佐藤花子", "高橋美智子"]),
        ScheduleEntry::new("7/22", "ワークショップK", "田中太郎", &["山田次郎", "鈴木一郎"]),
        ScheduleEntry::new("7/25", "セミナーL", "高橋美智子", &["佐藤花子", "田中太郎"]),
        ScheduleEntry::new("7/28", "プロジェクトM", "山田次郎", &["鈴木一郎", "高橋美智子"]),
        ScheduleEntry::new("7/30", "イベントN", "佐藤花子", &["田中太郎", "山田次郎"]),
    ]
}
