use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use chrono::{TimeZone, Utc};
use taxforge_core::EntityId;
use taxforge_lines::{DocumentType, LineBuilder};
use taxforge_orders::{
    LineItem, LineItemId, Order, OrderId, Shipment, ShipmentId, ShippingRate, TaxCategory, TaxCode,
};

fn order_with(items: usize, shipments: usize) -> Order {
    let tax_category = TaxCategory::new("General", Some(TaxCode::new("P0000000").unwrap()));

    Order {
        id: OrderId::new(EntityId::new()),
        currency: "USD".to_string(),
        placed_at: Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
        line_items: (0..items)
            .map(|i| LineItem {
                id: LineItemId::new(EntityId::new()),
                description: format!("Item {i}"),
                quantity: 2,
                unit_price: 750,
                total: Some(1500),
                tax_category: Some(tax_category.clone()),
            })
            .collect(),
        shipments: (0..shipments)
            .map(|_| Shipment {
                id: ShipmentId::new(EntityId::new()),
                selected_rate: Some(ShippingRate {
                    label: "Ground".to_string(),
                    cost: 500,
                    tax_category: None,
                }),
            })
            .collect(),
    }
}

fn bench_sales_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("sales_line_build");

    for items in [10usize, 100, 1000] {
        let order = order_with(items, 5);
        group.throughput(Throughput::Elements((items + 5) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(items), &order, |b, order| {
            b.iter(|| {
                let set = LineBuilder::new(black_box(order), DocumentType::SalesOrder, None)
                    .build()
                    .unwrap();
                black_box(set)
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_sales_build);
criterion_main!(benches);
