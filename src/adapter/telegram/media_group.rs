//! Media Group Planning
//!
//! ファイルセットを Bot API の送信単位に分割する

use std::ops::Range;

/// sendMediaGroup の最大要素数
pub const MAX_ALBUM_SIZE: usize = 10;

/// 送信単位
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    /// sendDocument（1ファイル）
    Document(usize),
    /// sendMediaGroup（2〜10ファイル）
    Album(Range<usize>),
}

/// `count` 個のファイルを送信単位に分割する
///
/// 1ファイルなら `Document`。それ以外は最大10個のアルバムに分け、
/// 末尾が1個だけ余る場合は直前のアルバムから1つ移して2個にする
/// （sendMediaGroup は2個未満を受け付けない）。
pub fn plan_deliveries(count: usize) -> Vec<Delivery> {
    if count == 0 {
        return Vec::new();
    }
    if count == 1 {
        return vec![Delivery::Document(0)];
    }

    let mut ranges: Vec<Range<usize>> = (0..count)
        .step_by(MAX_ALBUM_SIZE)
        .map(|start| start..(start + MAX_ALBUM_SIZE).min(count))
        .collect();

    let n = ranges.len();
    if n >= 2 && ranges[n - 1].len() == 1 {
        ranges[n - 2].end -= 1;
        ranges[n - 1].start -= 1;
    }

    ranges.into_iter().map(Delivery::Album).collect()
}

/// multipart の添付名
pub fn attach_name(index: usize) -> String {
    format!("file{}", index)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sizes(plan: &[Delivery]) -> Vec<usize> {
        plan.iter()
            .map(|d| match d {
                Delivery::Document(_) => 1,
                Delivery::Album(r) => r.len(),
            })
            .collect()
    }

    #[test]
    fn test_zero_files() {
        assert!(plan_deliveries(0).is_empty());
    }

    #[test]
    fn test_single_file_is_document() {
        assert_eq!(plan_deliveries(1), vec![Delivery::Document(0)]);
    }

    #[test]
    fn test_two_files_single_album() {
        assert_eq!(plan_deliveries(2), vec![Delivery::Album(0..2)]);
    }

    #[test]
    fn test_ten_files_single_album() {
        assert_eq!(plan_deliveries(10), vec![Delivery::Album(0..10)]);
    }

    #[test]
    fn test_eleven_files_avoids_single_item_album() {
        assert_eq!(
            plan_deliveries(11),
            vec![Delivery::Album(0..9), Delivery::Album(9..11)]
        );
    }

    #[test]
    fn test_plans_cover_every_index_in_order() {
        for count in 2..=35 {
            let plan = plan_deliveries(count);
            let mut next = 0;
            for delivery in &plan {
                match delivery {
                    Delivery::Album(range) => {
                        assert_eq!(range.start, next);
                        assert!((2..=MAX_ALBUM_SIZE).contains(&range.len()), "count {}", count);
                        next = range.end;
                    }
                    Delivery::Document(_) => panic!("unexpected document for {}", count),
                }
            }
            assert_eq!(next, count);
            assert_eq!(sizes(&plan).iter().sum::<usize>(), count);
        }
    }

    #[test]
    fn test_attach_name() {
        assert_eq!(attach_name(3), "file3");
    }
}
