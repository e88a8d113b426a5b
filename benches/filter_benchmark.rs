use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use stock_grid::{
    FilterMode, Sector, SortDirection, SortState, StockFilter, StockGenerator,
    SymbolMatch,
};

fn bench_filter_evaluation(c: &mut Criterion) {
    let row_count: usize = 50_000;
    let stocks = StockGenerator::new(0xBADF00D).generate(row_count);

    let mut filter = StockFilter::default();
    filter.set_sector(Sector::Technology, true);
    filter.set_sector(Sector::Energy, true);
    filter.set_industry("Banks", true);
    filter.set_symbol_query("a");
    filter.set_symbol_match(SymbolMatch::Contains);

    let mut group = c.benchmark_group("filter_evaluation");
    group.throughput(Throughput::Elements(row_count as u64));

    for mode in FilterMode::ALL {
        let mut filter = filter.clone();
        filter.set_mode(mode);
        group.bench_function(format!("apply_{}", mode.as_str()), |b| {
            b.iter(|| black_box(filter.apply_indexed(black_box(&stocks))).len())
        });
    }

    let sort = SortState {
        field: stock_grid::Field::ChangePercent,
        direction: SortDirection::Descending,
    };
    group.bench_function("apply_and_sort", |b| {
        b.iter(|| {
            let mut rows = filter.apply_indexed(black_box(&stocks));
            rows.sort_by(|(_, a), (_, b)| sort.compare(a, b));
            rows.len()
        })
    });

    group.finish();
}

criterion_group!(benches, bench_filter_evaluation);
criterion_main!(benches);
