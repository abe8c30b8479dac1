use criterion::{black_box, criterion_group, criterion_main, Criterion};
use planner::{classify, create_plan, parse_goal};

const GOALS: [&str; 4] = [
    "판교에서 강남으로 오늘 20:00 가는 길",
    "내일 오후 8시에 '팀미팅' 일정 잡아줘",
    "RAG 논문 검색해서 요약 후 me@example.com 메일 보내줘",
    "오늘 AI 뉴스 요약해서 카톡 보내줘",
];

fn classify_benchmark(c: &mut Criterion) {
    c.bench_function("classify", |b| {
        b.iter(|| {
            for goal in GOALS {
                black_box(classify(black_box(goal)));
            }
        });
    });
}

fn parse_goal_benchmark(c: &mut Criterion) {
    c.bench_function("parse_goal", |b| {
        b.iter(|| {
            for goal in GOALS {
                black_box(parse_goal(black_box(goal)));
            }
        });
    });
}

fn create_plan_benchmark(c: &mut Criterion) {
    let available = vec!["calendar.read".to_string(), "map.route".to_string()];

    c.bench_function("create_plan strict", |b| {
        b.iter(|| {
            for goal in GOALS {
                black_box(create_plan(black_box(goal), Some(&available), true));
            }
        });
    });
}

criterion_group!(benches, classify_benchmark, parse_goal_benchmark, create_plan_benchmark);
criterion_main!(benches);
