//! Built-in screen templates.

pub(super) const ORDERS: (&str, &str) = (
    "orders",
    "{% if loading %}Loading orders...
{% endif %}{% if error %}Failed to load orders: {{ error }}
{% endif %}{% for row in rows %}{{ row.id }} | {{ row.customer }} | {{ row.package }} | {{ row.address }} | {{ row.order_date }} | {{ row.total_price }} | {{ row.status }} | {{ row.technician }}
{% else %}No orders found.
{% endfor %}",
);

pub(super) const CANDIDATES: (&str, &str) = (
    "candidates",
    "Assign technician to order {{ order_id }}
{% if none_available %}No technician available
{% else %}{% for candidate in candidates %}  {{ candidate.id }}  {{ candidate.name }}
{% endfor %}{% endif %}",
);

pub(super) const TECHNICIANS: (&str, &str) = (
    "technicians",
    "{% for t in technicians %}{{ t.id }} | {{ t.name }} | {{ t.email }} | {{ t.location }} | {{ t.status }} | jobs: {{ t.jobs }}
{% else %}No technicians found.
{% endfor %}",
);

pub(super) const PRODUCTS: (&str, &str) = (
    "products",
    "{% for p in products %}{{ p.id }} | {{ p.name }} | {{ p.price }} | {{ p.speed }} Mbps
{% else %}No products found.
{% endfor %}",
);

pub(super) const USERS: (&str, &str) = (
    "users",
    "{% for u in users %}{{ u.id }} | {{ u.name }} | {{ u.email }}
{% else %}No customers found.
{% endfor %}",
);

pub(super) const METRICS: (&str, &str) = (
    "metrics",
    "Customers:   {{ metrics.customers }}
Products:    {{ metrics.products }}
Orders:      {{ metrics.orders }}
Technicians: {{ metrics.technicians }}
",
);

pub(super) const RECENT_ORDERS: (&str, &str) = (
    "recent_orders",
    "{% for row in rows %}{{ row.id }} | {{ row.customer }} | {{ row.package }} | {{ row.total_price }} | {{ row.status }}
{% else %}No recent orders.
{% endfor %}",
);

pub(super) const NOTICES: (&str, &str) = (
    "notices",
    "{% for notice in notices %}[{{ notice.kind }}] {{ notice.message }}
{% endfor %}",
);

pub(super) const ALL: [(&str, &str); 8] = [
    ORDERS,
    CANDIDATES,
    TECHNICIANS,
    PRODUCTS,
    USERS,
    METRICS,
    RECENT_ORDERS,
    NOTICES,
];
