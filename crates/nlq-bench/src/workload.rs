// NLQ Bench - Comparative benchmarking for natural-language query backends
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Query workloads.
//!
//! A catalog of business questions over an e-commerce schema (customers,
//! orders, products, reviews, support tickets), grouped by category and
//! complexity, plus business scenarios and parameterized templates.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of a catalog query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryCategory {
    /// Single-table counts and filters.
    SimpleLookup,
    /// Sums, averages and totals.
    Aggregation,
    /// Questions spanning several tables.
    Join,
    /// Rankings and derived measures.
    ComplexAnalytics,
    /// Trends, distributions, lifetime figures.
    BusinessIntelligence,
    /// Data-quality checks.
    EdgeCases,
}

/// How much an axis matters for a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Importance {
    Low,
    Medium,
    High,
    VeryHigh,
}

/// Expected response characteristics of a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Expectation {
    /// Shape of a good answer, e.g. `"tabular"`.
    pub response_type: &'static str,
    /// Importance of a correct answer.
    pub accuracy_importance: Importance,
    /// Importance of a fast answer.
    pub speed_importance: Importance,
}

const SIMPLE_LOOKUP: &[&str] = &[
    "How many customers do we have?",
    "What is the total number of orders?",
    "Show me all products in the Electronics category",
    "List all customers from California",
    "How many support tickets are currently open?",
    "What is the average product price?",
    "Show me all orders with status 'delivered'",
    "List all products with stock quantity less than 10",
    "How many reviews have 5-star ratings?",
    "Show me all customers who signed up in the last month",
];

const AGGREGATION: &[&str] = &[
    "What is the total revenue from all orders?",
    "What is the average order value?",
    "How much revenue did we generate last month?",
    "What is the total number of items sold?",
    "What is the average rating across all products?",
    "How many orders does each customer have on average?",
    "What is the total value of pending orders?",
    "What is the average time to resolve support tickets?",
    "How many products are in each category?",
    "What is the total number of verified purchase reviews?",
];

const JOIN: &[&str] = &[
    "Show me all orders with customer names and email addresses",
    "List all products with their average ratings",
    "Show me customers who have placed orders and their total spending",
    "List all support tickets with customer contact information",
    "Show me products that have been reviewed with customer names",
    "List all orders with product details and quantities",
    "Show me customers who have both orders and support tickets",
    "List all reviews with product names and customer emails",
    "Show me orders with payment status and customer information",
    "List all products with their total sales quantity",
];

const COMPLEX_ANALYTICS: &[&str] = &[
    "Which customers have spent the most money?",
    "What are our top 5 selling products?",
    "Which products have the highest average ratings?",
    "Show me customers who haven't placed an order in the last 3 months",
    "What is the customer retention rate?",
    "Which categories generate the most revenue?",
    "Show me products with low stock that have high demand",
    "What is the average order value by customer location?",
    "Which customers have the most support tickets?",
    "What is the correlation between product price and rating?",
];

const BUSINESS_INTELLIGENCE: &[&str] = &[
    "What is our monthly revenue trend over the last 6 months?",
    "Which payment methods are most popular?",
    "What is the average time between customer registration and first order?",
    "Show me the distribution of order statuses",
    "What is the customer lifetime value?",
    "Which products have the highest return rate?",
    "What is the average response time for support tickets?",
    "Show me seasonal trends in order volume",
    "What is the conversion rate from customer registration to first purchase?",
    "Which customers are at risk of churning?",
];

const EDGE_CASES: &[&str] = &[
    "Find customers with multiple email addresses",
    "Show me orders with negative total amounts",
    "List products with zero price",
    "Find customers with invalid phone numbers",
    "Show me orders placed in the future",
    "List products with duplicate SKUs",
    "Find customers with orders but no reviews",
    "Show me support tickets without assigned agents",
    "List orders with missing customer information",
    "Find products with more reviews than sales",
];

/// Queries per category taken by [`benchmark_queries`].
pub const BENCHMARK_QUERIES_PER_CATEGORY: usize = 2;

impl QueryCategory {
    /// Every category, in catalog order.
    pub const ALL: [QueryCategory; 6] = [
        QueryCategory::SimpleLookup,
        QueryCategory::Aggregation,
        QueryCategory::Join,
        QueryCategory::ComplexAnalytics,
        QueryCategory::BusinessIntelligence,
        QueryCategory::EdgeCases,
    ];

    /// Snake-case identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryCategory::SimpleLookup => "simple_lookup",
            QueryCategory::Aggregation => "aggregation",
            QueryCategory::Join => "join",
            QueryCategory::ComplexAnalytics => "complex_analytics",
            QueryCategory::BusinessIntelligence => "business_intelligence",
            QueryCategory::EdgeCases => "edge_cases",
        }
    }

    /// Parses a snake-case identifier.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == name)
    }

    /// Queries of this category.
    pub fn queries(&self) -> &'static [&'static str] {
        match self {
            QueryCategory::SimpleLookup => SIMPLE_LOOKUP,
            QueryCategory::Aggregation => AGGREGATION,
            QueryCategory::Join => JOIN,
            QueryCategory::ComplexAnalytics => COMPLEX_ANALYTICS,
            QueryCategory::BusinessIntelligence => BUSINESS_INTELLIGENCE,
            QueryCategory::EdgeCases => EDGE_CASES,
        }
    }

    /// Complexity on a 1 to 5 scale.
    pub fn complexity(&self) -> u8 {
        match self {
            QueryCategory::SimpleLookup => 1,
            QueryCategory::Aggregation => 2,
            QueryCategory::Join => 3,
            QueryCategory::ComplexAnalytics => 4,
            QueryCategory::BusinessIntelligence => 5,
            QueryCategory::EdgeCases => 3,
        }
    }

    /// Expected response characteristics.
    pub fn expectation(&self) -> Expectation {
        use Importance::*;
        let (response_type, accuracy_importance, speed_importance) = match self {
            QueryCategory::SimpleLookup => ("count/list", High, High),
            QueryCategory::Aggregation => ("calculation", VeryHigh, Medium),
            QueryCategory::Join => ("tabular", High, Medium),
            QueryCategory::ComplexAnalytics => ("analysis", VeryHigh, Low),
            QueryCategory::BusinessIntelligence => ("insights", VeryHigh, Low),
            QueryCategory::EdgeCases => ("validation", Medium, Medium),
        };
        Expectation {
            response_type,
            accuracy_importance,
            speed_importance,
        }
    }
}

impl fmt::Display for QueryCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every catalog query, category by category.
pub fn all_queries() -> Vec<String> {
    QueryCategory::ALL
        .iter()
        .flat_map(|c| c.queries().iter().map(|q| q.to_string()))
        .collect()
}

/// Queries of one category.
pub fn queries_by_category(category: QueryCategory) -> Vec<String> {
    category.queries().iter().map(|q| q.to_string()).collect()
}

/// Queries of every category with the given complexity.
pub fn queries_by_complexity(complexity: u8) -> Vec<String> {
    QueryCategory::ALL
        .iter()
        .filter(|c| c.complexity() == complexity)
        .flat_map(|c| c.queries().iter().map(|q| q.to_string()))
        .collect()
}

/// Balanced subset: the first two queries of each category.
pub fn benchmark_queries() -> Vec<String> {
    QueryCategory::ALL
        .iter()
        .flat_map(|c| {
            c.queries()
                .iter()
                .take(BENCHMARK_QUERIES_PER_CATEGORY)
                .map(|q| q.to_string())
        })
        .collect()
}

/// Random distinct catalog queries, at most the catalog size.
///
/// Deterministic for a seeded `rng`.
pub fn random_sample<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Vec<String> {
    let all = all_queries();
    all.choose_multiple(rng, size).cloned().collect()
}

/// Business scenario with its own focused questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scenario {
    CustomerService,
    InventoryManagement,
    FinancialAnalysis,
    QualityAssurance,
}

impl Scenario {
    /// Every scenario.
    pub const ALL: [Scenario; 4] = [
        Scenario::CustomerService,
        Scenario::InventoryManagement,
        Scenario::FinancialAnalysis,
        Scenario::QualityAssurance,
    ];

    /// Questions of this scenario.
    pub fn queries(&self) -> &'static [&'static str] {
        match self {
            Scenario::CustomerService => &[
                "Find all orders for customer john.doe@email.com",
                "Show me the support ticket history for customer ID 123",
                "What products has customer sarah.smith@email.com purchased?",
                "List all open support tickets for customers from New York",
                "Show me customers with multiple failed payment attempts",
            ],
            Scenario::InventoryManagement => &[
                "Which products are running low on stock?",
                "Show me products with zero inventory",
                "What is the total inventory value?",
                "List products that need restocking",
                "Show me inventory turnover by product category",
            ],
            Scenario::FinancialAnalysis => &[
                "What is our total revenue this year?",
                "Show me monthly revenue breakdown",
                "What is the average order value by payment method?",
                "List customers with highest lifetime value",
                "Show me revenue by product category",
            ],
            Scenario::QualityAssurance => &[
                "Find products with average rating below 3 stars",
                "Show me customers with multiple support tickets",
                "List orders with delivery delays",
                "Find products with high return rates",
                "Show me support tickets that took more than 7 days to resolve",
            ],
        }
    }
}

/// Parameter values for [`QueryTemplate::variations`].
///
/// Only parameters that are set produce a variation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateParams {
    pub email: Option<String>,
    pub customer_id: Option<String>,
    pub city: Option<String>,
    pub month: Option<String>,
    pub date_range: Option<String>,
    pub status: Option<String>,
    pub amount: Option<String>,
    pub payment_method: Option<String>,
    pub category: Option<String>,
    pub brand: Option<String>,
    pub price: Option<String>,
    pub rating: Option<String>,
    pub quantity: Option<String>,
}

/// Query family that can be instantiated with parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryTemplate {
    CustomerLookup,
    OrderAnalysis,
    ProductAnalysis,
}

impl QueryTemplate {
    /// Instantiates the template with every parameter that is set.
    ///
    /// ```
    /// use nlq_bench::workload::{QueryTemplate, TemplateParams};
    ///
    /// let params = TemplateParams {
    ///     city: Some("Austin".to_string()),
    ///     ..Default::default()
    /// };
    /// assert_eq!(
    ///     QueryTemplate::CustomerLookup.variations(&params),
    ///     vec!["List customers from Austin", "Show me active customers"],
    /// );
    /// ```
    pub fn variations(&self, params: &TemplateParams) -> Vec<String> {
        fn fill(out: &mut Vec<String>, value: &Option<String>, render: impl Fn(&str) -> String) {
            if let Some(value) = value {
                out.push(render(value));
            }
        }

        let mut out = Vec::new();
        match self {
            QueryTemplate::CustomerLookup => {
                fill(&mut out, &params.email, |v| format!("Find customer with email {v}"));
                fill(&mut out, &params.customer_id, |v| format!("Show me customer {v}"));
                fill(&mut out, &params.city, |v| format!("List customers from {v}"));
                fill(&mut out, &params.month, |v| {
                    format!("Find customers who signed up in {v}")
                });
                out.push("Show me active customers".to_string());
            }
            QueryTemplate::OrderAnalysis => {
                fill(&mut out, &params.date_range, |v| format!("Show me orders from {v}"));
                fill(&mut out, &params.status, |v| format!("List orders with status {v}"));
                fill(&mut out, &params.amount, |v| format!("Find orders above ${v}"));
                fill(&mut out, &params.payment_method, |v| format!("Show me orders by {v}"));
                fill(&mut out, &params.customer_id, |v| {
                    format!("List orders for customer {v}")
                });
            }
            QueryTemplate::ProductAnalysis => {
                fill(&mut out, &params.category, |v| {
                    format!("Show me products in category {v}")
                });
                fill(&mut out, &params.brand, |v| format!("List products by brand {v}"));
                fill(&mut out, &params.price, |v| format!("Find products under ${v}"));
                fill(&mut out, &params.rating, |v| {
                    format!("Show me products with rating above {v}")
                });
                fill(&mut out, &params.quantity, |v| {
                    format!("List products with stock below {v}")
                });
            }
        }
        out
    }
}

/// Ordered list of queries with optional category tags.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Workload {
    texts: Vec<String>,
    categories: Vec<Option<QueryCategory>>,
}

impl Workload {
    /// Creates an empty workload.
    pub fn new() -> Self {
        Self::default()
    }

    /// Untagged workload from plain query texts.
    pub fn from_queries<I, S>(queries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut workload = Self::new();
        for query in queries {
            workload.push(query, None);
        }
        workload
    }

    /// Every query of the given categories, tagged.
    pub fn from_categories(categories: &[QueryCategory]) -> Self {
        let mut workload = Self::new();
        for &category in categories {
            for query in category.queries() {
                workload.push(*query, Some(category));
            }
        }
        workload
    }

    /// Tagged balanced subset, see [`benchmark_queries`].
    pub fn benchmark() -> Self {
        let mut workload = Self::new();
        for category in QueryCategory::ALL {
            for query in category.queries().iter().take(BENCHMARK_QUERIES_PER_CATEGORY) {
                workload.push(*query, Some(category));
            }
        }
        workload
    }

    /// The whole catalog, tagged.
    pub fn catalog() -> Self {
        Self::from_categories(&QueryCategory::ALL)
    }

    /// Untagged scenario questions.
    pub fn from_scenario(scenario: Scenario) -> Self {
        Self::from_queries(scenario.queries().iter().copied())
    }

    /// Appends a query.
    pub fn push(&mut self, query: impl Into<String>, category: Option<QueryCategory>) {
        self.texts.push(query.into());
        self.categories.push(category);
    }

    /// Query texts in order.
    pub fn texts(&self) -> &[String] {
        &self.texts
    }

    /// Category tag of the first entry with this text.
    pub fn category_of(&self, query: &str) -> Option<QueryCategory> {
        self.texts
            .iter()
            .position(|t| t == query)
            .and_then(|i| self.categories[i])
    }

    /// Number of queries.
    pub fn len(&self) -> usize {
        self.texts.len()
    }

    /// Whether there are no queries.
    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }
}
