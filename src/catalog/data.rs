use std::sync::LazyLock;

use crate::models::{DishEntry, Slot};

// (name, kcal, carbs g, protein g, fat g)
type Row = (&'static str, u32, u32, u32, u32);

const BREAKFAST: &[Row] = &[
    ("현미밥 1공기", 300, 65, 6, 2),
    ("삶은 계란 2개", 155, 1, 13, 11),
    ("그릭요거트 150g", 146, 6, 15, 7),
    ("오트밀 40g", 150, 27, 5, 3),
    ("바나나 1개", 105, 27, 1, 0),
    ("통밀 토스트 2장", 160, 28, 8, 2),
    ("무가당 두유 1팩", 130, 10, 8, 6),
    ("사과 1개", 95, 25, 0, 0),
];

const LUNCH: &[Row] = &[
    ("잡곡밥 1공기", 310, 68, 7, 2),
    ("닭가슴살 샐러드", 250, 10, 30, 9),
    ("된장찌개", 180, 12, 13, 8),
    ("소고기 미역국", 150, 5, 14, 8),
    ("연어 스테이크 150g", 310, 0, 34, 18),
    ("두부 부침", 190, 4, 14, 13),
    ("시금치 나물", 60, 6, 4, 3),
    ("고구마 150g", 195, 45, 3, 0),
    ("비빔밥", 550, 85, 18, 14),
];

const DINNER: &[Row] = &[
    ("닭가슴살 구이 200g", 330, 0, 62, 7),
    ("닭볶음탕", 420, 20, 35, 20),
    ("현미밥 반공기", 150, 32, 3, 1),
    ("고등어 구이", 290, 0, 26, 20),
    ("소고기 안심 스테이크 150g", 320, 0, 39, 18),
    ("브로콜리 데침", 55, 11, 4, 1),
    ("두부조림", 170, 8, 14, 10),
    ("계란찜", 140, 3, 11, 9),
    ("양배추 샐러드", 70, 12, 2, 2),
];

const SNACK: &[Row] = &[
    ("아몬드 한 줌", 170, 6, 6, 15),
    ("프로틴 쉐이크", 120, 3, 24, 1),
    ("방울토마토 10개", 35, 7, 2, 0),
    ("저지방 우유 200ml", 90, 10, 7, 2),
];

/// Built-in reference dishes, fixed for the lifetime of the process.
pub static BUILTIN_DISHES: LazyLock<Vec<DishEntry>> = LazyLock::new(|| {
    [
        (Slot::Breakfast, BREAKFAST),
        (Slot::Lunch, LUNCH),
        (Slot::Dinner, DINNER),
        (Slot::Snack, SNACK),
    ]
    .into_iter()
    .flat_map(|(slot, rows)| {
        rows.iter()
            .map(move |&(name, cal, c, p, f)| DishEntry::new(name, slot, cal, c, p, f))
    })
    .collect()
});
