//! ページネーション計算
//!
//! 現在ページと総ページ数から、表示するページ番号（最大5つ）と
//! 先頭・末尾へのジャンプ（省略記号付き）の表示有無を求める

/// 一度に表示するページ番号の最大数
pub const WINDOW_SIZE: u32 = 5;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageWindow {
    pub pages: Vec<u32>,
    /// "1 …" を表示するか
    pub show_first: bool,
    /// "… 最終ページ" を表示するか
    pub show_last: bool,
}

/// 総件数からページ数を計算（切り上げ）
pub fn total_pages(total_results: u32, page_size: u32) -> u32 {
    if page_size == 0 {
        return 0;
    }
    total_results.div_ceil(page_size)
}

/// 表示するページ番号ウィンドウを計算
///
/// # Examples
/// ```
/// use movie_mania_common::page_window;
///
/// let window = page_window(19, 20);
/// assert_eq!(window.pages, vec![16, 17, 18, 19, 20]);
/// assert!(window.show_first);
/// assert!(!window.show_last);
/// ```
pub fn page_window(current_page: u32, total_pages: u32) -> PageWindow {
    let start = if total_pages <= WINDOW_SIZE || current_page <= 3 {
        1
    } else if current_page >= total_pages - 2 {
        total_pages - (WINDOW_SIZE - 1)
    } else {
        current_page - 2
    };
    let end = (start + WINDOW_SIZE - 1).min(total_pages);

    let pages: Vec<u32> = (start..=end).collect();
    let show_first = pages.first().is_some_and(|&p| p > 1);
    let show_last = pages.last().is_some_and(|&p| p < total_pages);

    PageWindow {
        pages,
        show_first,
        show_last,
    }
}

/// 「前へ」が押せるか
pub fn has_previous(current_page: u32) -> bool {
    current_page > 1
}

/// 「次へ」が押せるか
pub fn has_next(current_page: u32, total_pages: u32) -> bool {
    current_page != total_pages
}
